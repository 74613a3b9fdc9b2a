//! FNVX Hash - Fowler–Noll–Vo hashing at every standard width
//!
//! This crate provides FNV-0, FNV-1 and FNV-1a over 32, 64, 128, 256, 512
//! and 1024 bit accumulators, plus native `u32` fast paths for the 32-bit
//! variants. FNV is not a cryptographic hash.
//!
//! # Example
//!
//! ```
//! use fnvx_hash::{fnv, fnv1a, fnv1a32, BitWidth};
//!
//! let input = "the quick brown fox jumped over the lazy dog";
//! assert_eq!(fnv1a32(input), 0x406d1fd8);
//! assert_eq!(fnv1a(input, BitWidth::W64), 0x4fb124b03ec8f8f8u64);
//! assert_eq!(fnv(input, "fnv1", BitWidth::W32).unwrap(), 0x19d97436u32);
//! ```

pub mod algorithms;
pub mod common;
pub mod config;
pub mod error;

use tracing::{debug, trace};

// Re-export main types
pub use algorithms::Algorithm;
#[allow(deprecated)]
pub use algorithms::{fnv0, fnv0_bytes, fnv032, fnv032_bytes};
pub use algorithms::{
    fnv1, fnv1_bytes, fnv132, fnv132_bytes, fnv1a, fnv1a_bytes, fnv1a32, fnv1a32_bytes,
};
pub use common::hash_types::{BitWidth, FnvHash};
pub use config::HashConfig;
pub use error::{FnvError, Result};
pub use num_bigint::BigUint;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hash `input` with the variant named `algorithm` (`fnv0`, `fnv1` or `fnv1a`)
///
/// Unknown names fail with [`FnvError::InvalidAlgorithm`]; there is no
/// fallback to a default variant.
pub fn fnv(input: &str, algorithm: &str, bits: BitWidth) -> Result<FnvHash> {
    let algo = algorithm.parse::<Algorithm>().map_err(|e| {
        debug!("Rejected FNV algorithm name {:?}", algorithm);
        e
    })?;
    trace!(algorithm = %algo, bits = %bits, len = input.len(), "dispatching FNV hash");
    Ok(algo.hash(input, bits))
}

/// Hash `input` with the variant and width from `config`
pub fn fnv_with(input: &str, config: &HashConfig) -> FnvHash {
    config.algorithm.hash(input, config.bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_dispatch_matches_direct() {
        let input = "dispatch wrapper";
        for bits in BitWidth::ALL {
            assert_eq!(fnv(input, "fnv1", bits).unwrap(), fnv1(input, bits));
            assert_eq!(fnv(input, "fnv1a", bits).unwrap(), fnv1a(input, bits));
        }
    }

    #[test]
    fn test_dispatch_rejects_unknown_name() {
        match fnv("x", "fnv1b", BitWidth::W32) {
            Err(FnvError::InvalidAlgorithm(name)) => assert_eq!(name, "fnv1b"),
            other => panic!("expected InvalidAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_fnv_with_default_is_fnv1a32() {
        let input = "config driven";
        let hash = fnv_with(input, &HashConfig::default());
        assert_eq!(hash, fnv1a32(input));
        assert_eq!(hash.bits(), BitWidth::W32);
    }
}
