//! HMAC adapter for the `SigningAlgorithm` port.

use crate::ports::outbound::SigningAlgorithm;
use signet_crypto::HmacAlgorithm;

impl SigningAlgorithm for HmacAlgorithm {
    fn signature(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        self.mac(key, message)
    }
}
