//! # Domain Layer
//!
//! Token encoding, signing and verification with no I/O dependencies.
//! The clock is reached only through the `TimeSource` port.

pub mod codec;
pub mod config;
pub mod errors;
pub mod signer;
pub mod timestamp;

pub use config::SignerConfig;
pub use errors::{ArgumentError, ConfigError, ErrorKind, SignerError};
pub use signer::Signer;
pub use timestamp::{timestamp_to_datetime, TimestampSigner, EPOCH};
