//! Output Feedback (OFB) mode
//!
//! The IV is encrypted repeatedly to form a keystream that does not depend
//! on the data. Encryption and decryption are the same operation.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::super::BlockCipher;
use super::BlockMode;
use crate::error::{validate, Result};

/// OFB mode implementation
#[derive(Clone)]
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    /// Current output block, which is also the keystream
    register: Zeroizing<Vec<u8>>,
    position: usize,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::iv_length("OFB initialization vector", iv.len(), block_size)?;

        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            position: block_size,
        })
    }

    /// Applies the keystream to `data` in place
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.position == B::block_size() {
                self.cipher.encrypt_block(&mut self.register)?;
                self.position = 0;
            }
            *byte ^= self.register[self.position];
            self.position += 1;
        }
        Ok(())
    }
}

impl<B: BlockCipher> BlockMode for Ofb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }
}
