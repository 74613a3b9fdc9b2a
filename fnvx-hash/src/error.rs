use thiserror::Error;

/// FNV hashing error types
#[derive(Error, Debug)]
pub enum FnvError {
    #[error("Invalid bit width: {0} (expected 32, 64, 128, 256, 512 or 1024)")]
    InvalidWidth(u32),

    #[error("Invalid algorithm: {0} (expected fnv0, fnv1 or fnv1a)")]
    InvalidAlgorithm(String),

    #[error("Invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FnvError>;
