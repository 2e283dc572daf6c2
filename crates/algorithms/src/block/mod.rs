//! Block cipher implementations
//!
//! This module contains the block cipher abstraction used by every mode of
//! operation, the AES implementations, and the modes themselves.

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use self::aes::{Aes, Aes128, Aes192, Aes256};
pub use modes::{BlockMode, Cbc, Cfb, Ctr, Ecb, Ofb};

/// A keyed block permutation
///
/// Implementations encrypt and decrypt exactly one block in place. Blocks of
/// any other length are rejected with [`Error::Length`](crate::Error::Length).
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Creates a keyed instance, validating the key length
    fn new(key: &[u8]) -> Result<Self>
    where
        Self: Sized;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}
