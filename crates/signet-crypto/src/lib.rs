//! # Signet Crypto - Keyed-Hash Primitives
//!
//! The black-box capabilities consumed by the token signer.
//!
//! ## Components
//!
//! | Module | Provides | Use Case |
//! |--------|----------|----------|
//! | `digest` | `DigestAlgorithm` | Selecting SHA-1 / SHA-2 for HMAC |
//! | `mac` | `HmacAlgorithm` | Key derivation and token signatures |
//! | `secret` | `SecretKey` | Owning the signing secret |
//! | `compare` | `constant_time_compare` | Signature verification |
//!
//! ## Security Properties
//!
//! - **HMAC**: accepts keys of any length, output length fixed by the digest
//! - **SecretKey**: zeroized on drop, redacted in `Debug`
//! - **Comparison**: content comparison never exits early (`subtle`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod digest;
pub mod errors;
pub mod mac;
pub mod secret;

// Re-exports
pub use compare::constant_time_compare;
pub use digest::DigestAlgorithm;
pub use errors::CryptoError;
pub use mac::HmacAlgorithm;
pub use secret::SecretKey;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
