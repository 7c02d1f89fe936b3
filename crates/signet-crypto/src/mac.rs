//! # HMAC Keyed Hashing
//!
//! The keyed-hash capability behind key derivation and token signatures.
//! Keys of any length are accepted (long keys are hashed, short keys padded).

use crate::DigestAlgorithm;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

macro_rules! hmac_digest {
    ($hash:ty, $key:expr, $message:expr) => {{
        let mut mac =
            <Hmac<$hash>>::new_from_slice($key).expect("HMAC can take key of any size");
        mac.update($message);
        mac.finalize().into_bytes().to_vec()
    }};
}

/// HMAC parameterised by a digest algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HmacAlgorithm {
    digest: DigestAlgorithm,
}

impl HmacAlgorithm {
    /// Create HMAC over the given digest.
    pub fn new(digest: DigestAlgorithm) -> Self {
        Self { digest }
    }

    /// Compute the authentication tag of `message` under `key`.
    pub fn mac(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        match self.digest {
            DigestAlgorithm::Sha1 => hmac_digest!(Sha1, key, message),
            DigestAlgorithm::Sha224 => hmac_digest!(Sha224, key, message),
            DigestAlgorithm::Sha256 => hmac_digest!(Sha256, key, message),
            DigestAlgorithm::Sha384 => hmac_digest!(Sha384, key, message),
            DigestAlgorithm::Sha512 => hmac_digest!(Sha512, key, message),
        }
    }
}
