//! Counter (CTR) mode with secure memory handling
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//!
//! The IV is the initial counter block. The whole block is treated as one
//! big-endian integer, as NIST SP 800-38A Appendix B.1 and OpenSSL do, and
//! wraps to zero after the all-ones block.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::super::BlockCipher;
use super::BlockMode;
use crate::error::{validate, Result};

/// Counter mode implementation with secure memory handling
#[derive(Clone)]
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    counter_block: Zeroizing<Vec<u8>>,
    keystream: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a new CTR mode instance starting at the counter block `iv`
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::iv_length("CTR initial counter block", iv.len(), block_size)?;

        Ok(Self {
            cipher,
            counter_block: Zeroizing::new(iv.to_vec()),
            keystream: Zeroizing::new(vec![0u8; block_size]),
            keystream_pos: block_size,
        })
    }

    /// Generate the next keystream block and advance the counter
    fn generate_keystream(&mut self) -> Result<()> {
        self.keystream.copy_from_slice(&self.counter_block);
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.increment_counter();
        self.keystream_pos = 0;
        Ok(())
    }

    /// Increment the counter block as a big-endian integer
    fn increment_counter(&mut self) {
        for byte in self.counter_block.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    /// Applies the keystream to `data` in place
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos == self.keystream.len() {
                self.generate_keystream()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }
        Ok(())
    }
}

impl<B: BlockCipher> BlockMode for Ctr<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }
}
