//! # Time Sources
//!
//! - `SystemTimeSource`: the wall clock
//! - `ManualTimeSource`: a clock the caller moves explicitly, for
//!   deterministic expiry checks

use crate::ports::outbound::TimeSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        // Clock before Unix epoch reads as zero rather than panicking
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Manually driven time source.
///
/// Stores nanoseconds since the Unix epoch in an atomic, so a shared
/// instance (`Arc<ManualTimeSource>`) can be advanced while signers hold it.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    nanos: AtomicU64,
}

impl ManualTimeSource {
    /// Start the clock at `now` since the Unix epoch.
    pub fn new(now: Duration) -> Self {
        Self {
            nanos: AtomicU64::new(duration_to_nanos(now)),
        }
    }

    /// Start the clock at whole Unix seconds.
    pub fn from_unix_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Jump to `now`.
    pub fn set(&self, now: Duration) {
        self.nanos.store(duration_to_nanos(now), Ordering::SeqCst);
    }

    /// Move forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let delta = duration_to_nanos(delta);
        self.update(|current| current.saturating_add(delta));
    }

    /// Move backward by `delta`, stopping at the Unix epoch.
    pub fn rewind(&self, delta: Duration) {
        let delta = duration_to_nanos(delta);
        self.update(|current| current.saturating_sub(delta));
    }

    fn update(&self, step: impl Fn(u64) -> u64) {
        let mut current = self.nanos.load(Ordering::SeqCst);
        loop {
            match self.nanos.compare_exchange_weak(
                current,
                step(current),
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

fn duration_to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
