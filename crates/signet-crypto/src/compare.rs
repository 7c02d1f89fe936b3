//! # Constant-Time Comparison
//!
//! Equality check for signatures whose running time does not depend on where
//! the inputs first differ. Only the length is allowed to leak.

use subtle::ConstantTimeEq;

/// Compare two byte strings without early exit on the first mismatch.
///
/// Returns `false` straight away when the lengths differ; otherwise every
/// byte pair is folded into the result.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
