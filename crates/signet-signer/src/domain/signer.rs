//! # Signer
//!
//! Signs a payload as `payload ‖ sep ‖ signature` and verifies such tokens.
//!
//! ## Key Derivation
//!
//! The signing key is `HMAC(secret, salt)`, recomputed for every call and
//! dropped (zeroized) right after use. Different salts give independent keys
//! from the same secret.
//!
//! ## Security
//!
//! - Verification splits on the *last* separator, so payloads may contain it
//! - Signatures are compared with `constant_time_compare` only

use crate::domain::codec::{base64_encode, constant_time_compare, split_on_last_separator};
use crate::domain::config::SignerConfig;
use crate::domain::errors::{ConfigError, SignerError};
use crate::ports::inbound::SigningApi;
use crate::ports::outbound::SigningAlgorithm;
use signet_crypto::{HmacAlgorithm, SecretKey};
use tracing::debug;
use zeroize::Zeroizing;

/// Token signer.
///
/// Immutable after construction; share it freely between threads.
pub struct Signer<A: SigningAlgorithm = HmacAlgorithm> {
    secret: SecretKey,
    salt: String,
    separator: String,
    algorithm: A,
}

impl Signer<HmacAlgorithm> {
    /// Signer with the default salt, `.` separator and HMAC-SHA1.
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        let config = SignerConfig::default();
        Self {
            secret: secret.into(),
            salt: config.salt,
            separator: config.separator,
            algorithm: HmacAlgorithm::new(config.digest),
        }
    }

    /// Signer using HMAC over the configured digest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the separator is invalid.
    pub fn with_config(
        secret: impl Into<SecretKey>,
        config: SignerConfig,
    ) -> Result<Self, ConfigError> {
        let algorithm = HmacAlgorithm::new(config.digest);
        Self::with_algorithm(secret, config, algorithm)
    }
}

impl<A: SigningAlgorithm> Signer<A> {
    /// Signer using a caller-supplied keyed-hash algorithm. The `digest`
    /// field of `config` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the separator is invalid.
    pub fn with_algorithm(
        secret: impl Into<SecretKey>,
        config: SignerConfig,
        algorithm: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            secret: secret.into(),
            salt: config.salt,
            separator: config.separator,
            algorithm,
        })
    }

    /// Key-derivation salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Segment separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Derive the signing key for this signer's salt.
    pub fn derive_key(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(
            self.algorithm
                .signature(self.secret.as_bytes(), self.salt.as_bytes()),
        )
    }

    /// Encoded signature of `value`.
    pub fn signature(&self, value: &[u8]) -> String {
        let key = self.derive_key();
        base64_encode(&self.algorithm.signature(&key, value))
    }

    /// Check `signature` against `value` in constant time.
    pub fn verify_signature(&self, value: &[u8], signature: &str) -> bool {
        let expected = self.signature(value);
        constant_time_compare(signature.as_bytes(), expected.as_bytes())
    }

    /// Produce `value ‖ sep ‖ signature(value)`.
    pub fn sign(&self, value: &str) -> String {
        let signature = self.signature(value.as_bytes());
        let mut token =
            String::with_capacity(value.len() + self.separator.len() + signature.len());
        token.push_str(value);
        token.push_str(&self.separator);
        token.push_str(&signature);
        token
    }

    /// Verify `token` and return the signed value.
    ///
    /// # Errors
    ///
    /// - `SignerError::MissingSeparator` if the token has no separator
    /// - `SignerError::SignatureMismatch` if the signature does not match
    pub fn unsign<'a>(&self, token: &'a str) -> Result<&'a str, SignerError> {
        let Some((value, signature)) = split_on_last_separator(token, &self.separator) else {
            debug!(separator = %self.separator, "rejected token without separator");
            return Err(SignerError::MissingSeparator {
                separator: self.separator.clone(),
            });
        };

        if self.verify_signature(value.as_bytes(), signature) {
            return Ok(value);
        }

        debug!(salt = %self.salt, "rejected token with mismatching signature");
        Err(SignerError::SignatureMismatch {
            signature: signature.to_string(),
        })
    }

    /// Whether `token` verifies.
    pub fn validate(&self, token: &str) -> bool {
        self.unsign(token).is_ok()
    }
}

impl<A: SigningAlgorithm> SigningApi for Signer<A> {
    fn sign(&self, value: &str) -> String {
        Signer::sign(self, value)
    }

    fn unsign<'a>(&self, token: &'a str) -> Result<&'a str, SignerError> {
        Signer::unsign(self, token)
    }
}

impl<A: SigningAlgorithm + std::fmt::Debug> std::fmt::Debug for Signer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("secret", &self.secret)
            .field("salt", &self.salt)
            .field("separator", &self.separator)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
