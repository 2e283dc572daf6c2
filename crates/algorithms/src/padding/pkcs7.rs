//! PKCS#7 padding (RFC 5652, section 6.3)
//!
//! Padding always adds between 1 and `block_size` bytes, each holding the
//! number of bytes added, so an aligned message gains a full block.

use alloc::vec::Vec;
use ciphra_internal::constant_time::{ct_in_range, ct_suffix_is};

use crate::error::{validate, Error, Result};

const SCHEME: &str = "PKCS#7";

/// Number of padding bytes PKCS#7 adds to a message of `len` bytes
#[inline]
pub fn padding_len(len: usize, block_size: usize) -> usize {
    block_size - (len % block_size)
}

/// Appends PKCS#7 padding to `data`
pub fn pad(data: &mut Vec<u8>, block_size: usize) -> Result<()> {
    validate::parameter(
        block_size > 0 && block_size <= u8::MAX as usize,
        "block_size",
        "PKCS#7 block size must be between 1 and 255",
    )?;

    let n = padding_len(data.len(), block_size);
    data.resize(data.len() + n, n as u8);
    Ok(())
}

/// Returns the length of the message inside a padded buffer
///
/// `data` must be a non-empty multiple of `block_size`. Only the last block
/// is inspected, and it is checked without branching on its contents.
pub fn unpadded_len(data: &[u8], block_size: usize) -> Result<usize> {
    validate::parameter(
        block_size > 0 && block_size <= u8::MAX as usize,
        "block_size",
        "PKCS#7 block size must be between 1 and 255",
    )?;
    validate::block_multiple("PKCS#7 input", data.len(), block_size)?;
    if data.is_empty() {
        return Err(Error::Length {
            context: "PKCS#7 input",
            block_size,
            actual: 0,
        });
    }

    let last = &data[data.len() - block_size..];
    let n = last[block_size - 1];
    let valid = ct_in_range(n, 1, block_size as u8) & ct_suffix_is(last, n);

    if !bool::from(valid) {
        return Err(Error::Padding { scheme: SCHEME });
    }
    Ok(data.len() - n as usize)
}

/// Strips PKCS#7 padding in place
pub fn unpad(data: &mut Vec<u8>, block_size: usize) -> Result<()> {
    let len = unpadded_len(data, block_size)?;
    data.truncate(len);
    Ok(())
}
