//! Validation utilities shared by the cipher layers

use super::{Error, Result};

/// Validate a key length against the algorithm's requirement
#[inline(always)]
pub fn key_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length against the algorithm's requirement
#[inline(always)]
pub fn iv_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a state transition
#[inline(always)]
pub fn state(condition: bool, operation: &'static str, state: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::state(operation, state));
    }
    Ok(())
}
