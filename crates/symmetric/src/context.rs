//! Cipher contexts
//!
//! A [`CipherContext`] is bound to exactly one algorithm from the registry.
//! It holds no stream of its own: every init returns a fresh
//! [`CipherStream`], so one context can drive any number of independent
//! operations.

use alloc::vec::Vec;

use ciphra_api::{Direction, Padding};

use crate::error::Result;
use crate::oneshot;
use crate::registry::{self, AlgorithmSpec, CipherFamily, CipherMode};
use crate::stream::CipherStream;

/// Handle bound to one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherContext {
    spec: AlgorithmSpec,
    padding: Padding,
}

impl CipherContext {
    /// Creates a context for a registry name such as `aes-256-cbc`
    pub fn from_name(name: &str) -> Result<Self> {
        let spec = registry::resolve(name)?;
        tracing::debug!(algorithm = spec.name(), "cipher context created");
        Ok(Self::from_spec(spec))
    }

    /// Creates a context from family, mode and key size in bits
    pub fn from_params(family: CipherFamily, mode: CipherMode, key_bits: usize) -> Result<Self> {
        let spec = registry::make_spec(family, mode, key_bits)?;
        tracing::debug!(algorithm = spec.name(), "cipher context created");
        Ok(Self::from_spec(spec))
    }

    /// Creates a context for a spec obtained from the registry
    pub fn from_spec(spec: AlgorithmSpec) -> Self {
        Self {
            spec,
            padding: Padding::default(),
        }
    }

    /// Returns the context with a different padding setting
    ///
    /// Padding only affects ECB and CBC.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn spec(&self) -> AlgorithmSpec {
        self.spec
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.spec.name()
    }

    /// Key length in bytes
    pub fn key_length(&self) -> usize {
        self.spec.key_length()
    }

    /// IV length in bytes; 0 if the algorithm takes no IV
    pub fn iv_length(&self) -> usize {
        self.spec.iv_length()
    }

    pub fn block_size(&self) -> usize {
        self.spec.block_size()
    }

    /// Starts a stream in the given direction
    ///
    /// Fails with `InvalidKeyLength` or `InvalidIvLength` when the lengths do
    /// not match exactly; nothing is truncated or padded.
    pub fn init(&self, direction: Direction, key: &[u8], iv: &[u8]) -> Result<CipherStream> {
        CipherStream::new(self.spec, direction, self.padding, key, iv)
    }

    pub fn encrypt_init(&self, key: &[u8], iv: &[u8]) -> Result<CipherStream> {
        self.init(Direction::Encrypt, key, iv)
    }

    pub fn decrypt_init(&self, key: &[u8], iv: &[u8]) -> Result<CipherStream> {
        self.init(Direction::Decrypt, key, iv)
    }

    /// Encrypts `data` in one call
    pub fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        oneshot::encrypt(self, data, key, iv)
    }

    /// Decrypts `data` in one call
    pub fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        oneshot::decrypt(self, data, key, iv)
    }
}
