/// 32-bit FNV on native `u32` arithmetic
///
/// Multiplying by the 32-bit prime is done with the shift-and-add identity
/// `h * 0x01000193 = h + (h << 1) + (h << 4) + (h << 7) + (h << 8) + (h << 24)`,
/// all wrapping modulo 2^32. Results are bit-identical to the generic engine
/// at 32 bits.

use super::constants::FNV_OFFSET_BASIS_32;

/// Multiply by the 32-bit FNV prime modulo 2^32
#[inline(always)]
pub const fn mul_prime_32(h: u32) -> u32 {
    h.wrapping_add(h << 1)
        .wrapping_add(h << 4)
        .wrapping_add(h << 7)
        .wrapping_add(h << 8)
        .wrapping_add(h << 24)
}

#[inline]
const fn fold_multiply_xor(mut hash: u32, data: &[u8]) -> u32 {
    let mut i = 0;
    while i < data.len() {
        hash = mul_prime_32(hash);
        hash ^= data[i] as u32;
        i += 1;
    }
    hash
}

#[inline]
const fn fold_xor_multiply(mut hash: u32, data: &[u8]) -> u32 {
    let mut i = 0;
    while i < data.len() {
        hash ^= data[i] as u32;
        hash = mul_prime_32(hash);
        i += 1;
    }
    hash
}

/// 32-bit FNV-0 of a UTF-8 string
#[deprecated(note = "FNV-0 maps many short inputs to 0; use fnv1a32 instead")]
pub const fn fnv032(input: &str) -> u32 {
    fold_multiply_xor(0, input.as_bytes())
}

/// 32-bit FNV-0 of raw bytes
#[deprecated(note = "FNV-0 maps many short inputs to 0; use fnv1a32_bytes instead")]
pub const fn fnv032_bytes(data: &[u8]) -> u32 {
    fold_multiply_xor(0, data)
}

/// 32-bit FNV-1 of a UTF-8 string
pub const fn fnv132(input: &str) -> u32 {
    fold_multiply_xor(FNV_OFFSET_BASIS_32, input.as_bytes())
}

/// 32-bit FNV-1 of raw bytes
pub const fn fnv132_bytes(data: &[u8]) -> u32 {
    fold_multiply_xor(FNV_OFFSET_BASIS_32, data)
}

/// 32-bit FNV-1a of a UTF-8 string
pub const fn fnv1a32(input: &str) -> u32 {
    fold_xor_multiply(FNV_OFFSET_BASIS_32, input.as_bytes())
}

/// 32-bit FNV-1a of raw bytes
pub const fn fnv1a32_bytes(data: &[u8]) -> u32 {
    fold_xor_multiply(FNV_OFFSET_BASIS_32, data)
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::algorithms::constants::FNV_PRIME_32;

    #[test]
    fn test_shift_identity() {
        for h in [0u32, 1, 0x61, 0x811c_9dc5, 0xdead_beef, u32::MAX] {
            assert_eq!(mul_prime_32(h), h.wrapping_mul(FNV_PRIME_32));
        }
    }

    #[test]
    fn test_known_vectors() {
        let fox = "the quick brown fox jumped over the lazy dog";
        assert_eq!(fnv132(fox), 0x19d9_7436);
        assert_eq!(fnv1a32(fox), 0x406d_1fd8);
        assert_eq!(fnv032(fox), 0x41e8_6d57);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fnv032(""), 0);
        assert_eq!(fnv132(""), FNV_OFFSET_BASIS_32);
        assert_eq!(fnv1a32(""), FNV_OFFSET_BASIS_32);
    }

    #[test]
    fn test_const_evaluation() {
        const ID: u32 = fnv1a32("gain");
        assert_eq!(ID, fnv1a32_bytes(b"gain"));
    }

    #[test]
    fn test_fnv1a32_distribution() {
        // One-bit input change should flip many output bits
        let diff = (fnv1a32("hash-a") ^ fnv1a32("hash-b")).count_ones();
        assert!(diff > 4);
    }
}
