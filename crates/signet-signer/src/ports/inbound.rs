//! # Inbound Ports (Driving Ports / API)
//!
//! The signing surface shared by `Signer` and `TimestampSigner`, so callers
//! can hold either behind `Box<dyn SigningApi>`.

use crate::domain::errors::SignerError;

/// Sign and verify tokens.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SigningApi: Send + Sync {
    /// Produce a token for `value`.
    fn sign(&self, value: &str) -> String;

    /// Verify `token` and return the payload it carries.
    ///
    /// # Errors
    /// * `SignerError` of kind `BadSignature` - never validly signed
    /// * `SignerError::BadData` - a segment failed to decode
    fn unsign<'a>(&self, token: &'a str) -> Result<&'a str, SignerError>;

    /// Whether `token` verifies.
    fn validate(&self, token: &str) -> bool {
        self.unsign(token).is_ok()
    }
}
