//! Constant-time byte comparison

use subtle::ConstantTimeEq;

/// Compare two byte sequences without leaking where they differ
///
/// Every byte pair is examined regardless of earlier mismatches, so the
/// running time depends only on the lengths. Sequences of different length
/// compare unequal immediately; that reveals the lengths differ and nothing
/// else. Use this for MACs, authentication tags and other secrets supplied
/// by an untrusted party.
#[must_use]
#[inline]
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
