//! # Signer Errors
//!
//! Every rejection is a `SignerError`. The variants form a taxonomy by
//! specificity:
//!
//! ```text
//! BadData
//! ├── BadSignature          (MissingSeparator, SignatureMismatch)
//! │   └── BadTimeSignature  (TimestampMissing)
//! └── SignatureExpired
//! ```
//!
//! Caller mistakes that are not about token content use `ArgumentError` and
//! `ConfigError`, which sit outside that hierarchy.

use signet_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while verifying a token.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SignerError {
    /// Malformed input (invalid base64, unrepresentable timestamp)
    #[error("Bad data: {0}")]
    BadData(String),

    /// The token has no separator at all
    #[error("No \"{separator}\" found in value")]
    MissingSeparator {
        /// Configured separator
        separator: String,
    },

    /// The claimed signature does not match the payload
    #[error("Signature \"{signature}\" does not match")]
    SignatureMismatch {
        /// Offending signature segment
        signature: String,
    },

    /// Signature is valid but the payload carries no timestamp segment
    #[error("Timestamp missing")]
    TimestampMissing,

    /// Signature is valid but older than the allowed age
    #[error("Signature age {age} > {max_age} seconds")]
    SignatureExpired {
        /// Observed age in seconds
        age: f64,
        /// Allowed age in seconds
        max_age: f64,
    },
}

/// Most specific taxonomy class of a `SignerError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input
    BadData,
    /// Missing or mismatching signature
    BadSignature,
    /// Timestamped token without its timestamp
    BadTimeSignature,
    /// Valid but stale
    SignatureExpired,
}

impl SignerError {
    /// Most specific class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignerError::BadData(_) => ErrorKind::BadData,
            SignerError::MissingSeparator { .. } | SignerError::SignatureMismatch { .. } => {
                ErrorKind::BadSignature
            }
            SignerError::TimestampMissing => ErrorKind::BadTimeSignature,
            SignerError::SignatureExpired { .. } => ErrorKind::SignatureExpired,
        }
    }

    /// The token was never validly signed (includes `BadTimeSignature`).
    pub fn is_bad_signature(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::BadSignature | ErrorKind::BadTimeSignature
        )
    }

    /// The timestamp segment is absent.
    pub fn is_bad_time_signature(&self) -> bool {
        self.kind() == ErrorKind::BadTimeSignature
    }

    /// The token was validly signed but is too old.
    pub fn is_expired(&self) -> bool {
        self.kind() == ErrorKind::SignatureExpired
    }
}

/// Invalid argument passed by the caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// Integer is negative or wider than 64 bits
    #[error("Integer must be non-negative and fit in 64 bits")]
    IntegerOutOfRange,
}

/// Invalid signer configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Separator is the empty string
    #[error("Separator must not be empty")]
    EmptySeparator,

    /// Separator would collide with encoded signatures or timestamps
    #[error("Separator {separator:?} contains URL-safe base64 characters")]
    SeparatorInAlphabet {
        /// Rejected separator
        separator: String,
    },

    /// Digest name not recognised
    #[error(transparent)]
    Digest(#[from] CryptoError),
}
