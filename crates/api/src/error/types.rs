//! Error type definitions for cipher operations

use alloc::string::String;

/// Primary error type for cipher operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested algorithm name is not in the registry
    UnknownAlgorithm {
        name: String,
    },

    /// Family, mode and key size do not form a supported algorithm
    UnsupportedCombination {
        family: &'static str,
        mode: &'static str,
        key_bits: usize,
    },

    /// Key length does not match the algorithm
    InvalidKeyLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// IV length does not match the algorithm
    InvalidIvLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operation called in a state that does not allow it
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    /// Total input length is incompatible with the block size
    InvalidInputLength {
        context: &'static str,
        block_size: usize,
        actual: usize,
    },

    /// PKCS#7 padding check failed on decrypt
    PaddingError {
        context: &'static str,
    },

    /// Invalid parameter, typically from configuration
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Failure reported by an underlying reader or writer
    Io {
        context: &'static str,
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an `InvalidState` error
    pub fn state(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidState { operation, state }
    }

    /// Shorthand for an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Stable identifier of the error kind, independent of its details
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownAlgorithm { .. } => "unknown_algorithm",
            Self::UnsupportedCombination { .. } => "unsupported_combination",
            Self::InvalidKeyLength { .. } => "invalid_key_length",
            Self::InvalidIvLength { .. } => "invalid_iv_length",
            Self::InvalidState { .. } => "invalid_state",
            Self::InvalidInputLength { .. } => "invalid_input_length",
            Self::PaddingError { .. } => "padding_error",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::Io { .. } => "io",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => {
                write!(f, "Unknown cipher algorithm: {}", name)
            },
            Self::UnsupportedCombination { family, mode, key_bits } => {
                write!(f, "Unsupported cipher combination: {} {} with {}-bit key",
                    family, mode, key_bits)
            },
            Self::InvalidKeyLength { algorithm, expected, actual } => {
                write!(f, "{}: key length must be {} (got {})",
                    algorithm, expected, actual)
            },
            Self::InvalidIvLength { algorithm, expected, actual } => {
                write!(f, "{}: IV length must be {} (got {})",
                    algorithm, expected, actual)
            },
            Self::InvalidState { operation, state } => {
                write!(f, "Invalid state: {} not allowed while {}", operation, state)
            },
            Self::InvalidInputLength { context, block_size, actual } => {
                write!(f, "{}: input length {} is not compatible with block size {}",
                    context, actual, block_size)
            },
            Self::PaddingError { context } => {
                write!(f, "Padding error: {}", context)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            Self::Io { context, message } => {
                write!(f, "{}: {}", context, message)
            },
        }
    }
}
