//! # Timestamp Signer
//!
//! Wraps a [`Signer`] and stamps every token with its creation time:
//!
//! ```text
//! payload ‖ sep ‖ base64(be_bytes(seconds since EPOCH)) ‖ sep ‖ signature
//! ```
//!
//! The signature covers the payload and the timestamp together, so the
//! timestamp is as trustworthy as the payload. Expiry is checked against a
//! caller-given maximum age at verification time.
//!
//! ## Verification Order
//!
//! 1. Base signature check on the whole token
//! 2. Timestamp separator presence (`TimestampMissing`)
//! 3. Timestamp decode (`BadData`); an empty segment is timestamp 0
//! 4. Optional maximum age (`SignatureExpired`); future timestamps pass

use crate::adapters::clock::SystemTimeSource;
use crate::domain::codec::{
    base64_decode, base64_encode, bytes_to_int, int_to_bytes, split_on_last_separator,
};
use crate::domain::config::SignerConfig;
use crate::domain::errors::{ConfigError, SignerError};
use crate::domain::signer::Signer;
use crate::ports::inbound::SigningApi;
use crate::ports::outbound::{SigningAlgorithm, TimeSource};
use chrono::{DateTime, Utc};
use signet_crypto::{HmacAlgorithm, SecretKey};
use std::time::Duration;
use tracing::{debug, warn};

/// 2011-01-01T00:00:00Z as Unix seconds. Timestamps count from here.
pub const EPOCH: u64 = 1_293_840_000;

/// Absolute UTC time of a decoded timestamp.
///
/// # Errors
///
/// Returns `SignerError::BadData` if the time is out of range.
pub fn timestamp_to_datetime(timestamp: u64) -> Result<DateTime<Utc>, SignerError> {
    EPOCH
        .checked_add(timestamp)
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .ok_or_else(|| SignerError::BadData(format!("timestamp {timestamp} out of range")))
}

/// Signer whose tokens carry a signed creation time.
pub struct TimestampSigner<
    T: TimeSource = SystemTimeSource,
    A: SigningAlgorithm = HmacAlgorithm,
> {
    signer: Signer<A>,
    clock: T,
}

impl TimestampSigner<SystemTimeSource, HmacAlgorithm> {
    /// Timestamp signer with default configuration and the system clock.
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        Self::from_parts(Signer::new(secret), SystemTimeSource)
    }

    /// Timestamp signer with the given configuration and the system clock.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the separator is invalid.
    pub fn with_config(
        secret: impl Into<SecretKey>,
        config: SignerConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            Signer::with_config(secret, config)?,
            SystemTimeSource,
        ))
    }
}

impl<T: TimeSource> TimestampSigner<T, HmacAlgorithm> {
    /// Timestamp signer reading time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the separator is invalid.
    pub fn with_clock(
        secret: impl Into<SecretKey>,
        config: SignerConfig,
        clock: T,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(Signer::with_config(secret, config)?, clock))
    }
}

impl<T: TimeSource, A: SigningAlgorithm> TimestampSigner<T, A> {
    /// Compose an existing signer with a clock.
    pub fn from_parts(signer: Signer<A>, clock: T) -> Self {
        Self { signer, clock }
    }

    /// Underlying signer.
    pub fn signer(&self) -> &Signer<A> {
        &self.signer
    }

    /// Fractional seconds elapsed since [`EPOCH`]. Negative if the clock
    /// reads earlier than the epoch.
    pub fn timestamp(&self) -> f64 {
        self.clock.now().as_secs_f64() - EPOCH as f64
    }

    /// Sign `value` with the current time.
    pub fn sign(&self, value: &str) -> String {
        let separator = self.signer.separator();
        let timestamp = base64_encode(&int_to_bytes(self.whole_seconds()));

        let stamped = format!("{value}{separator}{timestamp}");
        let signature = self.signer.signature(stamped.as_bytes());

        format!("{stamped}{separator}{signature}")
    }

    /// Verify `token` and return its payload.
    ///
    /// With `max_age`, tokens older than that are rejected.
    ///
    /// # Errors
    ///
    /// - `MissingSeparator` / `SignatureMismatch` if the signature is bad
    /// - `TimestampMissing` if the signed value has no timestamp separator
    /// - `BadData` if the timestamp does not decode
    /// - `SignatureExpired` if the token is older than `max_age`
    pub fn unsign<'a>(
        &self,
        token: &'a str,
        max_age: Option<Duration>,
    ) -> Result<&'a str, SignerError> {
        self.unsign_timestamp(token, max_age).map(|(value, _)| value)
    }

    /// Verify `token` and return its payload with the signing time.
    ///
    /// # Errors
    ///
    /// As [`TimestampSigner::unsign`].
    pub fn unsign_with_timestamp<'a>(
        &self,
        token: &'a str,
        max_age: Option<Duration>,
    ) -> Result<(&'a str, DateTime<Utc>), SignerError> {
        let (value, timestamp) = self.unsign_timestamp(token, max_age)?;
        Ok((value, timestamp_to_datetime(timestamp)?))
    }

    /// Whether `token` verifies and is no older than `max_age`.
    pub fn validate(&self, token: &str, max_age: Option<Duration>) -> bool {
        self.unsign(token, max_age).is_ok()
    }

    fn unsign_timestamp<'a>(
        &self,
        token: &'a str,
        max_age: Option<Duration>,
    ) -> Result<(&'a str, u64), SignerError> {
        // A failed base check yields no value to look for a timestamp in,
        // so its signature error surfaces as is.
        let stamped = self.signer.unsign(token)?;

        let Some((value, encoded)) = split_on_last_separator(stamped, self.signer.separator())
        else {
            debug!("rejected signed token without timestamp");
            return Err(SignerError::TimestampMissing);
        };

        let timestamp = bytes_to_int(&base64_decode(encoded)?)?;

        if let Some(max_age) = max_age {
            let age = self.timestamp() - timestamp as f64;
            let limit = max_age.as_secs_f64();

            if age > limit {
                debug!(age, max_age = limit, "rejected expired token");
                return Err(SignerError::SignatureExpired {
                    age,
                    max_age: limit,
                });
            }
        }

        Ok((value, timestamp))
    }

    fn whole_seconds(&self) -> u64 {
        let now = self.clock.now().as_secs();
        match now.checked_sub(EPOCH) {
            Some(elapsed) => elapsed,
            None => {
                warn!(unix_secs = now, "clock reads before 2011-01-01, stamping 0");
                0
            }
        }
    }
}

impl<T: TimeSource, A: SigningAlgorithm> SigningApi for TimestampSigner<T, A> {
    fn sign(&self, value: &str) -> String {
        TimestampSigner::sign(self, value)
    }

    fn unsign<'a>(&self, token: &'a str) -> Result<&'a str, SignerError> {
        TimestampSigner::unsign(self, token, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ManualTimeSource;
    use std::sync::Arc;

    /// 2024-01-01T00:00:00Z
    const NOW: u64 = 1_704_067_200;

    fn manual(now: u64) -> (Arc<ManualTimeSource>, TimestampSigner<Arc<ManualTimeSource>>) {
        let clock = Arc::new(ManualTimeSource::from_unix_secs(now));
        let signer =
            TimestampSigner::with_clock("foo", SignerConfig::default(), Arc::clone(&clock))
                .unwrap();
        (clock, signer)
    }

    #[test]
    fn test_sign_unsign() {
        let ts = TimestampSigner::new("foo");
        let token = ts.sign("bar");
        assert_eq!(ts.unsign(&token, None), Ok("bar"));
    }

    #[test]
    fn test_token_layout() {
        let (_, ts) = manual(NOW);
        let token = ts.sign("bar");

        let expected_ts = base64_encode(&int_to_bytes(NOW - EPOCH));
        let stamped = format!("bar.{expected_ts}");
        let signature = ts.signer().signature(stamped.as_bytes());

        assert_eq!(token, format!("{stamped}.{signature}"));
    }

    #[test]
    fn test_stamped_value_verifies_with_base_signer() {
        let (_, ts) = manual(NOW);
        let token = ts.sign("bar");
        let stamped = ts.signer().unsign(&token).unwrap();
        assert!(stamped.starts_with("bar."));
    }

    #[test]
    fn test_return_timestamp() {
        let (clock, ts) = manual(NOW);
        clock.advance(Duration::from_millis(750));

        let token = ts.sign("bar");
        let (value, time) = ts.unsign_with_timestamp(&token, None).unwrap();

        assert_eq!(value, "bar");
        assert_eq!(time.timestamp(), NOW as i64);
    }

    #[test]
    fn test_expired() {
        let (clock, ts) = manual(NOW);
        let token = ts.sign("bar");

        clock.advance(Duration::from_secs(11));
        let err = ts.unsign(&token, Some(Duration::from_secs(10))).unwrap_err();

        assert_eq!(
            err,
            SignerError::SignatureExpired {
                age: 11.0,
                max_age: 10.0
            }
        );
        assert!(err.is_expired());
        assert!(!err.is_bad_signature());
    }

    #[test]
    fn test_within_max_age() {
        let (clock, ts) = manual(NOW);
        let token = ts.sign("bar");

        clock.advance(Duration::from_secs(10));
        assert_eq!(ts.unsign(&token, Some(Duration::from_secs(10))), Ok("bar"));
    }

    #[test]
    fn test_fractional_signing_time_truncates() {
        let (clock, ts) = manual(NOW);
        clock.advance(Duration::from_millis(900));
        let token = ts.sign("bar");

        // Stamped at NOW, verified at NOW + 0.9s
        assert!(ts.validate(&token, Some(Duration::from_secs(1))));
        assert!(!ts.validate(&token, Some(Duration::from_millis(500))));
    }

    #[test]
    fn test_future_timestamp_accepted() {
        let (clock, ts) = manual(NOW);
        let token = ts.sign("bar");

        clock.rewind(Duration::from_secs(3_600));
        assert_eq!(ts.unsign(&token, Some(Duration::from_secs(1))), Ok("bar"));
    }

    #[test]
    fn test_no_separator_is_bad_signature() {
        let ts = TimestampSigner::new("foo");
        let err = ts.unsign("nosep", None).unwrap_err();
        assert!(matches!(err, SignerError::MissingSeparator { .. }));
    }

    #[test]
    fn test_bad_signature_takes_precedence() {
        let ts = TimestampSigner::new("foo");
        let err = ts.unsign("bar.whatever", None).unwrap_err();
        assert_eq!(
            err,
            SignerError::SignatureMismatch {
                signature: "whatever".into()
            }
        );
    }

    #[test]
    fn test_validly_signed_without_timestamp() {
        let ts = TimestampSigner::new("foo");
        let plain = ts.signer().sign("bar");

        let err = ts.unsign(&plain, None).unwrap_err();
        assert_eq!(err, SignerError::TimestampMissing);
        assert!(err.is_bad_time_signature());
        assert!(err.is_bad_signature());
    }

    #[test]
    fn test_empty_timestamp_segment_is_zero() {
        let ts = TimestampSigner::new("foo");
        let plain = ts.signer().sign("bar.");

        let (value, time) = ts.unsign_with_timestamp(&plain, None).unwrap();
        assert_eq!(value, "bar");
        assert_eq!(time.timestamp(), EPOCH as i64);
    }

    #[test]
    fn test_signed_at_epoch_round_trips() {
        let (clock, ts) = manual(EPOCH);
        let token = ts.sign("bar");
        assert_eq!(token, format!("bar..{}", ts.signer().signature(b"bar.")));

        clock.advance(Duration::from_secs(5));
        assert_eq!(ts.unsign(&token, Some(Duration::from_secs(10))), Ok("bar"));
        assert!(ts
            .unsign(&token, Some(Duration::from_secs(4)))
            .unwrap_err()
            .is_expired());
    }

    #[test]
    fn test_undecodable_timestamp() {
        let ts = TimestampSigner::new("foo");
        let plain = ts.signer().sign("bar.!");
        assert!(matches!(
            ts.unsign(&plain, None),
            Err(SignerError::BadData(_))
        ));
    }

    #[test]
    fn test_clock_before_epoch_stamps_zero() {
        let (_, ts) = manual(EPOCH - 100);
        let token = ts.sign("bar");

        let (value, time) = ts.unsign_with_timestamp(&token, None).unwrap();
        assert_eq!(value, "bar");
        assert_eq!(time.timestamp(), EPOCH as i64);
    }

    #[test]
    fn test_custom_separator() {
        let clock = Arc::new(ManualTimeSource::from_unix_secs(NOW));
        let config = SignerConfig::default().with_separator("::");
        let ts = TimestampSigner::with_clock("foo", config, Arc::clone(&clock)).unwrap();

        let token = ts.sign("x::y:");
        assert_eq!(token.matches("::").count(), 3);
        assert!(!token.contains('.'));

        let (value, time) = ts.unsign_with_timestamp(&token, None).unwrap();
        assert_eq!(value, "x::y:");
        assert_eq!(time.timestamp(), NOW as i64);

        let default = TimestampSigner::with_clock("foo", SignerConfig::default(), clock).unwrap();
        assert!(default.unsign(&token, None).unwrap_err().is_bad_signature());
    }

    #[test]
    fn test_timestamp_to_datetime() {
        let time = timestamp_to_datetime(0).unwrap();
        assert_eq!(time.to_rfc3339(), "2011-01-01T00:00:00+00:00");

        assert!(timestamp_to_datetime(u64::MAX).is_err());
    }

    #[test]
    fn test_timestamp_is_fractional() {
        let (clock, ts) = manual(EPOCH + 10);
        clock.advance(Duration::from_millis(250));
        assert!((ts.timestamp() - 10.25).abs() < 1e-6);
    }

    #[test]
    fn test_signing_api_ignores_age() {
        let (clock, ts) = manual(NOW);
        let token = SigningApi::sign(&ts, "bar");

        clock.advance(Duration::from_secs(86_400 * 365));
        assert_eq!(SigningApi::unsign(&ts, &token), Ok("bar"));
    }
}
