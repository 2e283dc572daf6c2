//! Cipher Feedback (CFB) mode, 128-bit segments
//!
//! The previous ciphertext block is encrypted to form the keystream for the
//! next block; the first keystream block comes from the IV. Partial blocks
//! are supported, and the position inside the current block is kept across
//! calls.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::super::BlockCipher;
use super::BlockMode;
use crate::error::{validate, Result};

/// CFB128 mode implementation
#[derive(Clone)]
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    /// Feedback register, filled with ciphertext as it is produced
    register: Zeroizing<Vec<u8>>,
    keystream: Zeroizing<Vec<u8>>,
    position: usize,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::iv_length("CFB initialization vector", iv.len(), block_size)?;

        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            keystream: Zeroizing::new(vec![0u8; block_size]),
            position: block_size,
        })
    }

    fn refill(&mut self) -> Result<()> {
        self.keystream.copy_from_slice(&self.register);
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.position = 0;
        Ok(())
    }
}

impl<B: BlockCipher> BlockMode for Cfb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.position == B::block_size() {
                self.refill()?;
            }
            *byte ^= self.keystream[self.position];
            self.register[self.position] = *byte;
            self.position += 1;
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.position == B::block_size() {
                self.refill()?;
            }
            let ciphertext = *byte;
            *byte ^= self.keystream[self.position];
            self.register[self.position] = ciphertext;
            self.position += 1;
        }
        Ok(())
    }
}
