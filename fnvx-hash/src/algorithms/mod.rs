/// FNV algorithm implementations

pub mod constants;
pub mod engine;
pub mod fast32;
pub mod fnv;

use crate::common::hash_types::{BitWidth, FnvHash};
use crate::error::{FnvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export main entry points
#[allow(deprecated)]
pub use fast32::{fnv032, fnv032_bytes};
pub use fast32::{fnv132, fnv132_bytes, fnv1a32, fnv1a32_bytes};
#[allow(deprecated)]
pub use fnv::{fnv0, fnv0_bytes};
pub use fnv::{fnv1, fnv1_bytes, fnv1a, fnv1a_bytes};

/// FNV variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Historical FNV-0 (zero initial accumulator)
    Fnv0,
    /// FNV-1 (multiply, then xor)
    Fnv1,
    /// FNV-1a (xor, then multiply)
    #[default]
    Fnv1a,
}

impl Algorithm {
    /// Every variant, in historical order
    pub const ALL: [Algorithm; 3] = [Algorithm::Fnv0, Algorithm::Fnv1, Algorithm::Fnv1a];

    /// Lowercase name used by the dispatch wrapper
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Fnv0 => "fnv0",
            Algorithm::Fnv1 => "fnv1",
            Algorithm::Fnv1a => "fnv1a",
        }
    }

    /// Hash a UTF-8 string with this variant
    pub fn hash(self, input: &str, bits: BitWidth) -> FnvHash {
        self.hash_bytes(input.as_bytes(), bits)
    }

    /// Hash raw bytes with this variant
    #[allow(deprecated)]
    pub fn hash_bytes(self, data: &[u8], bits: BitWidth) -> FnvHash {
        match self {
            Algorithm::Fnv0 => fnv::fnv0_bytes(data, bits),
            Algorithm::Fnv1 => fnv::fnv1_bytes(data, bits),
            Algorithm::Fnv1a => fnv::fnv1a_bytes(data, bits),
        }
    }
}

impl FromStr for Algorithm {
    type Err = FnvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fnv0" => Ok(Algorithm::Fnv0),
            "fnv1" => Ok(Algorithm::Fnv1),
            "fnv1a" => Ok(Algorithm::Fnv1a),
            other => Err(FnvError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.to_string(), algo.name());
        }
        assert_eq!(Algorithm::default(), Algorithm::Fnv1a);
    }

    #[test]
    fn test_unknown_algorithm() {
        for name in ["fnv2", "FNV1A", "fnv-1a", "", "fnv1a "] {
            match name.parse::<Algorithm>() {
                Err(FnvError::InvalidAlgorithm(n)) => assert_eq!(n, name),
                other => panic!("expected InvalidAlgorithm for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_algorithm_serde() {
        assert_eq!(serde_json::to_string(&Algorithm::Fnv1a).unwrap(), "\"fnv1a\"");
        let algo: Algorithm = serde_json::from_str("\"fnv0\"").unwrap();
        assert_eq!(algo, Algorithm::Fnv0);
        assert!(serde_json::from_str::<Algorithm>("\"murmur\"").is_err());
    }

    #[test]
    fn test_hash_dispatches_to_variant() {
        let input = "dispatch";
        assert_eq!(Algorithm::Fnv1.hash(input, BitWidth::W64), fnv1(input, BitWidth::W64));
        assert_eq!(Algorithm::Fnv1a.hash(input, BitWidth::W64), fnv1a(input, BitWidth::W64));
        assert_eq!(Algorithm::Fnv0.hash("", BitWidth::W32), 0u32);
    }
}
