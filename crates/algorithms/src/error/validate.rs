//! Validation utilities for cipher primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::KeyLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length
#[inline(always)]
pub fn iv_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::IvLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a multiple of the block size
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::Length {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate that a buffer holds exactly one block
#[inline(always)]
pub fn single_block(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual != block_size {
        return Err(Error::Length {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}
