//! Signer configuration and validation
//!
//! # Example
//!
//! ```
//! use signet_signer::{DigestAlgorithm, SignerConfig};
//!
//! let config = SignerConfig::default()
//!     .with_salt("password-reset")
//!     .with_digest(DigestAlgorithm::Sha256);
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::domain::codec::is_base64url_char;
use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};
use signet_crypto::DigestAlgorithm;

/// Default key-derivation salt.
pub const DEFAULT_SALT: &str = "signet.Signer";

/// Default separator between token segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Construction-time parameters of a signer. The secret is passed separately
/// and is never part of a serializable config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Key-derivation context
    pub salt: String,
    /// Segment separator
    pub separator: String,
    /// HMAC digest
    pub digest: DigestAlgorithm,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            digest: DigestAlgorithm::default(),
        }
    }
}

impl SignerConfig {
    /// Create a validated configuration.
    pub fn new(
        salt: impl Into<String>,
        separator: impl Into<String>,
        digest: DigestAlgorithm,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            salt: salt.into(),
            separator: separator.into(),
            digest,
        };
        config.validate()?;
        Ok(config)
    }

    /// The separator must be non-empty and share no character with the
    /// URL-safe base64 alphabet, otherwise it could occur inside an encoded
    /// signature or timestamp and break last-separator splitting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }

        if self.separator.chars().any(is_base64url_char) {
            return Err(ConfigError::SeparatorInAlphabet {
                separator: self.separator.clone(),
            });
        }

        Ok(())
    }

    /// Builder-style method to set the salt
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Builder-style method to set the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder-style method to set the digest
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    /// Builder-style method to set the digest by name (`"sha256"`)
    pub fn with_digest_name(self, name: &str) -> Result<Self, ConfigError> {
        Ok(self.with_digest(name.parse()?))
    }
}
