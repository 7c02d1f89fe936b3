//! # Token Codec
//!
//! Byte and integer encodings used inside token segments.
//!
//! - Signatures and timestamps are URL-safe base64 without `=` padding, so
//!   they never contain the separator.
//! - Timestamps are the minimal big-endian byte string of their value.

use crate::domain::errors::{ArgumentError, SignerError};
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;

pub use signet_crypto::constant_time_compare;

/// Characters of the URL-safe base64 alphabet.
pub fn is_base64url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// URL-safe base64 encode without padding.
pub fn base64_encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Restore padding to the next multiple of four, then URL-safe base64 decode.
///
/// # Errors
///
/// Returns `SignerError::BadData` if the repadded input is not valid base64.
pub fn base64_decode(encoded: &str) -> Result<Vec<u8>, SignerError> {
    let padding = (4 - encoded.len() % 4) % 4;
    let mut padded = String::with_capacity(encoded.len() + padding);
    padded.push_str(encoded);
    padded.extend(std::iter::repeat('=').take(padding));

    URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| SignerError::BadData(format!("invalid base64 {encoded:?}: {e}")))
}

/// Shortest big-endian encoding of `num`. Zero encodes as the empty sequence.
pub fn int_to_bytes(num: u64) -> Vec<u8> {
    let bytes = num.to_be_bytes();
    let leading_zeros = (num.leading_zeros() / 8) as usize;
    bytes[leading_zeros..].to_vec()
}

/// [`int_to_bytes`] for any integer type.
///
/// # Errors
///
/// Returns `ArgumentError::IntegerOutOfRange` for negative values and values
/// wider than 64 bits.
pub fn try_int_to_bytes<N>(num: N) -> Result<Vec<u8>, ArgumentError>
where
    N: TryInto<u64>,
{
    num.try_into()
        .map(int_to_bytes)
        .map_err(|_| ArgumentError::IntegerOutOfRange)
}

/// Decode a big-endian byte sequence. Empty input yields 0.
///
/// # Errors
///
/// Returns `SignerError::BadData` when more than eight significant bytes are
/// given.
pub fn bytes_to_int(bytes: &[u8]) -> Result<u64, SignerError> {
    let significant = match bytes.iter().position(|b| *b != 0) {
        Some(start) => &bytes[start..],
        None => return Ok(0),
    };

    if significant.len() > 8 {
        return Err(SignerError::BadData(format!(
            "integer of {} bytes does not fit in 64 bits",
            significant.len()
        )));
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)))
}

/// Split around the last occurrence of `sep`.
///
/// The suffix never contains `sep`. Returns `None` when `sep` is absent.
pub fn split_on_last_separator<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let index = s.rfind(sep)?;
    Some((&s[..index], &s[index + sep.len()..]))
}
