//! Error handling for cipher primitives

use core::fmt;

use ciphra_api::Error as CoreError;

/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Key has the wrong length for the primitive
    KeyLength {
        /// Primitive that rejected the key
        algorithm: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// IV or nonce has the wrong length for the primitive
    IvLength {
        /// Primitive that rejected the IV
        algorithm: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Data length is not a whole number of blocks
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Block size the length must be a multiple of
        block_size: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Padding did not verify
    Padding {
        /// Padding scheme that failed
        scheme: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::KeyLength { algorithm, expected, actual } => {
                write!(f, "Invalid key length for {}: expected {}, got {}",
                    algorithm, expected, actual)
            },
            Error::IvLength { algorithm, expected, actual } => {
                write!(f, "Invalid IV length for {}: expected {}, got {}",
                    algorithm, expected, actual)
            },
            Error::Length { context, block_size, actual } => {
                write!(f, "Invalid length for {}: {} is not a multiple of {}",
                    context, actual, block_size)
            },
            Error::Padding { scheme } => {
                write!(f, "Invalid {} padding", scheme)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into(),
            },
            Error::KeyLength { algorithm, expected, actual } => CoreError::InvalidKeyLength {
                algorithm,
                expected,
                actual,
            },
            Error::IvLength { algorithm, expected, actual } => CoreError::InvalidIvLength {
                algorithm,
                expected,
                actual,
            },
            Error::Length { context, block_size, actual } => CoreError::InvalidInputLength {
                context,
                block_size,
                actual,
            },
            Error::Padding { scheme } => CoreError::PaddingError { context: scheme },
        }
    }
}

// Include the validation submodule
pub mod validate;
