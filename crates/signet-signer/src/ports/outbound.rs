//! # Outbound Ports (Driven Ports / SPI)
//!
//! Capabilities the signers consume without implementing them.

use std::sync::Arc;
use std::time::Duration;

/// Keyed-hash primitive used for key derivation and signatures.
///
/// Implementations must be deterministic and return a fixed-length tag for a
/// given configuration.
pub trait SigningAlgorithm: Send + Sync {
    /// Authentication tag of `message` under `key`.
    fn signature(&self, key: &[u8], message: &[u8]) -> Vec<u8>;
}

/// Time source for timestamped tokens.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Elapsed time since the Unix epoch, with sub-second resolution.
    fn now(&self) -> Duration;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
