/// Bit widths and fixed-width hash values

use crate::error::{FnvError, Result};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Output width of an FNV hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    #[default]
    W32,
    W64,
    W128,
    W256,
    W512,
    W1024,
}

impl BitWidth {
    /// Every supported width, smallest first
    pub const ALL: [BitWidth; 6] = [
        BitWidth::W32,
        BitWidth::W64,
        BitWidth::W128,
        BitWidth::W256,
        BitWidth::W512,
        BitWidth::W1024,
    ];

    /// Number of bits in the hash
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
            BitWidth::W128 => 128,
            BitWidth::W256 => 256,
            BitWidth::W512 => 512,
            BitWidth::W1024 => 1024,
        }
    }

    /// Number of bytes in the hash
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Look up a width by its bit count
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            32 => Ok(BitWidth::W32),
            64 => Ok(BitWidth::W64),
            128 => Ok(BitWidth::W128),
            256 => Ok(BitWidth::W256),
            512 => Ok(BitWidth::W512),
            1024 => Ok(BitWidth::W1024),
            other => {
                debug!(bits = other, "rejected unsupported FNV bit width");
                Err(FnvError::InvalidWidth(other))
            }
        }
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = FnvError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.bits()
    }
}

impl FromStr for BitWidth {
    type Err = FnvError;

    fn from_str(s: &str) -> Result<Self> {
        // Anything that is not a u32 can never be a valid width either
        let bits = s.trim().parse::<u32>().map_err(|_| FnvError::InvalidWidth(0))?;
        Self::from_bits(bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Result of an FNV hash: an unsigned integer of exactly `bits` bits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FnvHash {
    bits: BitWidth,
    value: BigUint,
}

impl FnvHash {
    /// Wrap a value already truncated to `bits`
    pub(crate) fn new(bits: BitWidth, value: BigUint) -> Self {
        debug_assert!(value.bits() <= u64::from(bits.bits()));
        Self { bits, value }
    }

    /// Width of this hash
    pub fn bits(&self) -> BitWidth {
        self.bits
    }

    /// Numeric value of the hash
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Consume the hash, keeping only its value
    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// Value as `u32`, if it fits
    pub fn to_u32(&self) -> Option<u32> {
        self.value.to_u32()
    }

    /// Value as `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    /// Big-endian bytes, zero-padded to the full width
    pub fn to_bytes(&self) -> Vec<u8> {
        let digits = self.value.to_bytes_be();
        let mut bytes = vec![0u8; self.bits.bytes().saturating_sub(digits.len())];
        bytes.extend_from_slice(&digits);
        bytes
    }

    /// Lowercase hex, zero-padded to `bits / 4` digits
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a hex string of exactly `bits / 4` digits (optional `0x` prefix)
    pub fn from_hex(bits: BitWidth, hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(digits)?;
        if bytes.len() != bits.bytes() {
            return Err(FnvError::InvalidHexLength {
                expected: bits.bytes(),
                actual: bytes.len(),
            });
        }
        Ok(Self::new(bits, BigUint::from_bytes_be(&bytes)))
    }
}

impl fmt::Display for FnvHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<FnvHash> for BigUint {
    fn from(hash: FnvHash) -> Self {
        hash.value
    }
}

impl PartialEq<BigUint> for FnvHash {
    fn eq(&self, other: &BigUint) -> bool {
        self.value == *other
    }
}

impl PartialEq<u64> for FnvHash {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl PartialEq<u32> for FnvHash {
    fn eq(&self, other: &u32) -> bool {
        self.to_u32() == Some(*other)
    }
}
