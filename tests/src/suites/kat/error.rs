//! Structured error types for the known-answer runner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("cipher operation failed: {0}")]
    Cipher(#[from] ciphra::api::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse suite: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("case {id}: {what} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        id: u32,
        what: &'static str,
        expected: String,
        actual: String,
    },

    #[error("case {id}: expected {expected} error, got {actual}")]
    WrongError {
        id: u32,
        expected: String,
        actual: String,
    },

    #[error("{failed} of {total} cases failed")]
    Failed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, KatError>;
