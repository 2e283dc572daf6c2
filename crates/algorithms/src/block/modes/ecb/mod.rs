//! Electronic Codebook (ECB) mode
//!
//! Every block is encrypted independently. Identical plaintext blocks give
//! identical ciphertext blocks, so ECB is only offered for interoperability.

use super::super::BlockCipher;
use super::BlockMode;
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Clone, Debug)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher> BlockMode for Ecb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_multiple("ECB input", data.len(), block_size)?;
        for block in data.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_multiple("ECB input", data.len(), block_size)?;
        for block in data.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }
}
