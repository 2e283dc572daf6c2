//! AES block cipher implementations
//!
//! The raw permutation is the RustCrypto `aes` crate, which selects AES-NI or
//! ARMv8 instructions at runtime and falls back to a constant-time bitsliced
//! implementation. This module puts it behind [`BlockCipher`] and adds key
//! length validation.

use ::aes::cipher::generic_array::GenericArray;
use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use ciphra_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

use super::BlockCipher;
use crate::error::{validate, Error, Result};

macro_rules! aes_variant {
    ($name:ident, $raw:ty, $key_size:expr, $label:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            inner: $raw,
        }

        impl BlockCipher for $name {
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn new(key: &[u8]) -> Result<Self> {
                validate::key_length($label, key.len(), $key_size)?;
                let inner = <$raw>::new_from_slice(key).map_err(|_| Error::KeyLength {
                    algorithm: $label,
                    expected: $key_size,
                    actual: key.len(),
                })?;
                Ok(Self { inner })
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::single_block("AES block", block.len(), AES_BLOCK_SIZE)?;
                self.inner.encrypt_block(GenericArray::from_mut_slice(block));
                Ok(())
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::single_block("AES block", block.len(), AES_BLOCK_SIZE)?;
                self.inner.decrypt_block(GenericArray::from_mut_slice(block));
                Ok(())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(concat!(stringify!($name), " { .. }"))
            }
        }
    };
}

aes_variant!(Aes128, ::aes::Aes128, AES128_KEY_SIZE, "AES-128", "AES-128 block cipher");
aes_variant!(Aes192, ::aes::Aes192, AES192_KEY_SIZE, "AES-192", "AES-192 block cipher");
aes_variant!(Aes256, ::aes::Aes256, AES256_KEY_SIZE, "AES-256", "AES-256 block cipher");

/// AES with the key size chosen at runtime from the key length
#[derive(Clone, Debug)]
pub enum Aes {
    /// 128-bit key
    Aes128(Aes128),
    /// 192-bit key
    Aes192(Aes192),
    /// 256-bit key
    Aes256(Aes256),
}

impl Aes {
    /// Key size in bytes
    pub fn key_size(&self) -> usize {
        match self {
            Aes::Aes128(_) => AES128_KEY_SIZE,
            Aes::Aes192(_) => AES192_KEY_SIZE,
            Aes::Aes256(_) => AES256_KEY_SIZE,
        }
    }
}

impl BlockCipher for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            AES128_KEY_SIZE => Aes128::new(key).map(Aes::Aes128),
            AES192_KEY_SIZE => Aes192::new(key).map(Aes::Aes192),
            AES256_KEY_SIZE => Aes256::new(key).map(Aes::Aes256),
            actual => Err(Error::KeyLength {
                algorithm: "AES",
                expected: AES256_KEY_SIZE,
                actual,
            }),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            Aes::Aes128(c) => c.encrypt_block(block),
            Aes::Aes192(c) => c.encrypt_block(block),
            Aes::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            Aes::Aes128(c) => c.decrypt_block(block),
            Aes::Aes192(c) => c.decrypt_block(block),
            Aes::Aes256(c) => c.decrypt_block(block),
        }
    }
}
