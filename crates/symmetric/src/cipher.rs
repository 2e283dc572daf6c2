//! Cipher sessions
//!
//! [`Cipher`] pairs a [`CipherContext`] with a single stream slot, for callers
//! that want the init/update/finish sequence on one object instead of holding
//! the [`CipherStream`] themselves. A session runs one stream at a time:
//! starting a new one while the previous stream is unfinished is an error,
//! not a silent reset.

use alloc::vec::Vec;
use core::fmt;

use ciphra_api::{Direction, Padding};

use crate::context::CipherContext;
use crate::error::{Error, Result};
use crate::registry::{self, CipherFamily, CipherMode};
use crate::stream::CipherStream;

/// Where a [`Cipher`] session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No stream has been started, or the last init failed
    Idle,
    /// A stream is in flight
    Active(Direction),
    /// The last stream has been finished
    Finished,
}

impl SessionState {
    fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Active(Direction::Encrypt) => "encrypting",
            SessionState::Active(Direction::Decrypt) => "decrypting",
            SessionState::Finished => "finished",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cipher context with one stream slot
pub struct Cipher {
    context: CipherContext,
    slot: Option<CipherStream>,
}

impl Cipher {
    /// Creates a session for a registry name
    pub fn new(name: &str) -> Result<Self> {
        CipherContext::from_name(name).map(Self::from_context)
    }

    pub fn from_params(family: CipherFamily, mode: CipherMode, key_bits: usize) -> Result<Self> {
        CipherContext::from_params(family, mode, key_bits).map(Self::from_context)
    }

    /// AES in `mode` with a 128, 192 or 256-bit key
    pub fn aes(mode: CipherMode, key_bits: usize) -> Result<Self> {
        Self::from_params(CipherFamily::Aes, mode, key_bits)
    }

    pub fn chacha20() -> Result<Self> {
        Self::from_params(CipherFamily::ChaCha20, CipherMode::Stream, 256)
    }

    pub fn from_context(context: CipherContext) -> Self {
        Self {
            context,
            slot: None,
        }
    }

    pub fn has_algorithm(name: &str) -> bool {
        registry::has_algorithm(name)
    }

    pub fn context(&self) -> &CipherContext {
        &self.context
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.context.algorithm_name()
    }

    pub fn key_length(&self) -> usize {
        self.context.key_length()
    }

    pub fn iv_length(&self) -> usize {
        self.context.iv_length()
    }

    pub fn block_size(&self) -> usize {
        self.context.block_size()
    }

    /// Changes padding for streams started after this call
    pub fn set_padding(&mut self, padding: Padding) {
        self.context.set_padding(padding);
    }

    pub fn state(&self) -> SessionState {
        match &self.slot {
            None => SessionState::Idle,
            Some(stream) if stream.is_finished() => SessionState::Finished,
            Some(stream) => SessionState::Active(stream.direction()),
        }
    }

    /// Starts an encryption stream in the slot
    ///
    /// Fails with `InvalidState` while another stream is in flight. A failed
    /// init leaves the session idle.
    pub fn encrypt_init(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        self.init(Direction::Encrypt, "encrypt_init", key, iv)
    }

    /// Starts a decryption stream in the slot
    ///
    /// Same rules as [`encrypt_init`](Self::encrypt_init).
    pub fn decrypt_init(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        self.init(Direction::Decrypt, "decrypt_init", key, iv)
    }

    fn init(
        &mut self,
        direction: Direction,
        operation: &'static str,
        key: &[u8],
        iv: &[u8],
    ) -> Result<()> {
        let state = self.state();
        if let SessionState::Active(_) = state {
            tracing::debug!(
                algorithm = self.algorithm_name(),
                state = state.as_str(),
                "session init refused"
            );
            return Err(Error::state(operation, state.as_str()));
        }

        self.slot = None;
        self.slot = Some(self.context.init(direction, key, iv)?);
        Ok(())
    }

    /// Feeds the in-flight stream, whichever its direction
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.stream_mut("update", None)?.update(input)
    }

    /// Finishes the in-flight stream, whichever its direction
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        self.stream_mut("finish", None)?.finish()
    }

    pub fn encrypt_update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.stream_mut("encrypt_update", Some(Direction::Encrypt))?
            .update(input)
    }

    pub fn encrypt_finish(&mut self) -> Result<Vec<u8>> {
        self.stream_mut("encrypt_finish", Some(Direction::Encrypt))?
            .finish()
    }

    pub fn decrypt_update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.stream_mut("decrypt_update", Some(Direction::Decrypt))?
            .update(input)
    }

    pub fn decrypt_finish(&mut self) -> Result<Vec<u8>> {
        self.stream_mut("decrypt_finish", Some(Direction::Decrypt))?
            .finish()
    }

    /// One-shot encryption; the slot is left untouched
    pub fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.context.encrypt(data, key, iv)
    }

    /// One-shot decryption; the slot is left untouched
    pub fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.context.decrypt(data, key, iv)
    }

    fn stream_mut(
        &mut self,
        operation: &'static str,
        expected: Option<Direction>,
    ) -> Result<&mut CipherStream> {
        let state = self.state();
        match (&mut self.slot, state) {
            (Some(stream), SessionState::Active(direction))
                if expected.map_or(true, |d| d == direction) =>
            {
                Ok(stream)
            }
            _ => Err(Error::state(operation, state.as_str())),
        }
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("algorithm", &self.algorithm_name())
            .field("state", &self.state())
            .finish()
    }
}
