use crate::algorithms::Algorithm;
use crate::common::hash_types::BitWidth;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Hash selection used by [`crate::fnv_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// FNV variant (`fnv0`, `fnv1` or `fnv1a`)
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,

    /// Output width in bits
    #[serde(default = "default_bits")]
    pub bits: BitWidth,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            bits: default_bits(),
        }
    }
}

impl HashConfig {
    /// Create a config for an explicit variant and width
    pub fn new(algorithm: Algorithm, bits: BitWidth) -> Self {
        Self { algorithm, bits }
    }

    /// Parse a JSON document such as `{"algorithm": "fnv1", "bits": 64}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// Default value functions for serde
fn default_algorithm() -> Algorithm { Algorithm::Fnv1a }
fn default_bits() -> BitWidth { BitWidth::W32 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FnvError;

    #[test]
    fn test_default_config() {
        let config = HashConfig::default();
        assert_eq!(config.algorithm, Algorithm::Fnv1a);
        assert_eq!(config.bits, BitWidth::W32);
        assert_eq!(HashConfig::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let config = HashConfig::from_json(r#"{"bits": 256}"#).unwrap();
        assert_eq!(config, HashConfig::new(Algorithm::Fnv1a, BitWidth::W256));

        let config = HashConfig::from_json(r#"{"algorithm": "fnv1"}"#).unwrap();
        assert_eq!(config, HashConfig::new(Algorithm::Fnv1, BitWidth::W32));
    }

    #[test]
    fn test_invalid_config_rejected() {
        for json in [
            r#"{"bits": 48}"#,
            r#"{"algorithm": "fnv2"}"#,
            r#"{"bits": "64"}"#,
            "not json",
        ] {
            assert!(matches!(HashConfig::from_json(json), Err(FnvError::Config(_))), "{}", json);
        }
    }

    #[test]
    fn test_config_roundtrip() {
        let config = HashConfig::new(Algorithm::Fnv0, BitWidth::W1024);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"algorithm":"fnv0","bits":1024}"#);
        assert_eq!(HashConfig::from_json(&json).unwrap(), config);
    }
}
