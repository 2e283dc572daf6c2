//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. The chaining value survives
//! between calls, so a message may be processed a few blocks at a time.

use alloc::vec;
use alloc::vec::Vec;
use ciphra_internal::constant_time::xor_in_place;
use zeroize::Zeroizing;

use super::super::BlockCipher;
use super::BlockMode;
use crate::error::{validate, Result};

/// CBC mode implementation
#[derive(Clone)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    chain: Zeroizing<Vec<u8>>,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::iv_length("CBC initialization vector", iv.len(), B::block_size())?;

        Ok(Self {
            cipher,
            chain: Zeroizing::new(iv.to_vec()),
        })
    }
}

impl<B: BlockCipher> BlockMode for Cbc<B> {
    /// Encrypts whole blocks in place
    ///
    /// For input that is not a multiple of the block size, padding must be
    /// applied before calling this function.
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_multiple("CBC plaintext", data.len(), block_size)?;

        for block in data.chunks_exact_mut(block_size) {
            xor_in_place(block, &self.chain);
            self.cipher.encrypt_block(block)?;
            self.chain.copy_from_slice(block);
        }

        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_multiple("CBC ciphertext", data.len(), block_size)?;

        let mut saved = Zeroizing::new(vec![0u8; block_size]);
        for block in data.chunks_exact_mut(block_size) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &self.chain);
            self.chain.copy_from_slice(&saved);
        }

        Ok(())
    }
}
