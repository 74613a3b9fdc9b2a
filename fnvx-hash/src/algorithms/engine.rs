/// Width-generic FNV mixing loop
///
/// Every variant is one left-to-right pass over the input bytes. The
/// accumulator is multiplied in full precision and then truncated to the
/// width, so it never holds more than `2 * W` bits.

use super::constants;
use crate::common::hash_types::BitWidth;
use num_bigint::BigUint;

/// Order of the two steps applied per byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOrder {
    /// `h = (h * p) mod 2^W; h ^= b` (FNV-0, FNV-1)
    MultiplyXor,
    /// `h ^= b; h = (h * p) mod 2^W` (FNV-1a)
    XorMultiply,
}

/// Fold `bytes` into the accumulator `h0` using the constants for `bits`.
///
/// `h0` is truncated to the width before the first byte is mixed in.
pub fn fold(h0: &BigUint, bits: BitWidth, order: FoldOrder, bytes: &[u8]) -> BigUint {
    let params = constants::params(bits);
    let mut hash = h0 & &params.mask;

    for &byte in bytes {
        match order {
            FoldOrder::MultiplyXor => {
                hash = multiply(&hash, &params.prime, &params.mask);
                hash ^= BigUint::from(byte);
            }
            FoldOrder::XorMultiply => {
                hash ^= BigUint::from(byte);
                hash = multiply(&hash, &params.prime, &params.mask);
            }
        }
    }

    hash
}

#[inline]
fn multiply(hash: &BigUint, prime: &BigUint, mask: &BigUint) -> BigUint {
    (hash * prime) & mask
}
