//! Crypto error types.

use thiserror::Error;

/// Keyed-hash configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Digest name not recognised
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedDigest(String),
}
