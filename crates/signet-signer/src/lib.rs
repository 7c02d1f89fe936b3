//! # Signet Signer
//!
//! Tamper-evident tokens for small string payloads handed to an untrusted
//! party (URLs, cookies). Payloads stay readable; only their origin and,
//! optionally, their age are guaranteed.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): codec, `Signer`, `TimestampSigner`, errors
//! - **Ports Layer** (`ports/`): `SigningApi` (inbound), `SigningAlgorithm`
//!   and `TimeSource` (outbound)
//! - **Adapters Layer** (`adapters/`): HMAC algorithm, system and manual clocks
//!
//! ## Token Format
//!
//! | Signer | Token |
//! |--------|-------|
//! | `Signer` | `payload.signature` |
//! | `TimestampSigner` | `payload.timestamp.signature` |
//!
//! Signature and timestamp are URL-safe base64 without padding. Verification
//! splits on the last separator, so the payload may contain it.
//!
//! ## Usage Example
//!
//! ```
//! use signet_signer::{Signer, TimestampSigner};
//! use std::time::Duration;
//!
//! let signer = Signer::new("secret-key");
//! let token = signer.sign("user-42");
//! assert_eq!(signer.unsign(&token).unwrap(), "user-42");
//!
//! let stamped = TimestampSigner::new("secret-key");
//! let token = stamped.sign("user-42");
//! let value = stamped.unsign(&token, Some(Duration::from_secs(3600))).unwrap();
//! assert_eq!(value, "user-42");
//! ```
//!
//! ## Security Notes
//!
//! - Signatures are compared in constant time
//! - Signing keys are derived per salt and zeroized after each call
//! - No confidentiality: anyone holding a token can read its payload

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::{ManualTimeSource, SystemTimeSource};
pub use domain::codec;
pub use domain::{
    timestamp_to_datetime, ArgumentError, ConfigError, ErrorKind, Signer, SignerConfig,
    SignerError, TimestampSigner, EPOCH,
};
pub use ports::{SigningAlgorithm, SigningApi, TimeSource};
pub use signet_crypto::{DigestAlgorithm, HmacAlgorithm, SecretKey};
