/// FNV-0, FNV-1 and FNV-1a at any supported width
///
/// FNV-1a has the better dispersion on short inputs and is the default
/// everywhere else in this crate. FNV-0 starts from zero instead of an offset
/// basis and is kept only for compatibility with old hashes.

use super::constants;
use super::engine::{fold, FoldOrder};
use crate::common::hash_types::{BitWidth, FnvHash};
use num_bigint::BigUint;
use num_traits::Zero;

/// FNV-0 hash of a UTF-8 string
#[deprecated(note = "FNV-0 maps many short inputs to 0; use fnv1a instead")]
pub fn fnv0(input: &str, bits: BitWidth) -> FnvHash {
    FnvHash::new(bits, fold(&BigUint::zero(), bits, FoldOrder::MultiplyXor, input.as_bytes()))
}

/// FNV-0 hash of raw bytes
#[deprecated(note = "FNV-0 maps many short inputs to 0; use fnv1a_bytes instead")]
pub fn fnv0_bytes(data: &[u8], bits: BitWidth) -> FnvHash {
    FnvHash::new(bits, fold(&BigUint::zero(), bits, FoldOrder::MultiplyXor, data))
}

/// FNV-1 hash of a UTF-8 string
pub fn fnv1(input: &str, bits: BitWidth) -> FnvHash {
    fnv1_bytes(input.as_bytes(), bits)
}

/// FNV-1 hash of raw bytes
pub fn fnv1_bytes(data: &[u8], bits: BitWidth) -> FnvHash {
    let start = constants::offset_basis(bits);
    FnvHash::new(bits, fold(start, bits, FoldOrder::MultiplyXor, data))
}

/// FNV-1a hash of a UTF-8 string
pub fn fnv1a(input: &str, bits: BitWidth) -> FnvHash {
    fnv1a_bytes(input.as_bytes(), bits)
}

/// FNV-1a hash of raw bytes
pub fn fnv1a_bytes(data: &[u8], bits: BitWidth) -> FnvHash {
    let start = constants::offset_basis(bits);
    FnvHash::new(bits, fold(start, bits, FoldOrder::XorMultiply, data))
}
