//! Streaming engine
//!
//! A [`CipherStream`] is created by a [`CipherContext`](crate::CipherContext)
//! and owns everything one encryption or decryption needs: the keyed
//! primitive with its chaining state, the bytes held back until a full block
//! is available, and its phase.
//!
//! ```text
//!   init ──> Active ──update*──> Active ──finish──> Finished
//! ```
//!
//! There is no way back from `Finished`; start a new stream from the context.
//! Output is released as early as the mode allows, and the concatenation of
//! every `update` output and the `finish` output does not depend on how the
//! input was split.

use alloc::vec::Vec;
use core::fmt;

use ciphra_algorithms::pkcs7;
use ciphra_api::{Direction, Padding, StreamingOperation};
use zeroize::Zeroizing;

use crate::engine::Engine;
use crate::error::{validate, validate_stream_state, Error, Result};
use crate::registry::AlgorithmSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Finished,
}

/// An in-flight encryption or decryption
///
/// Streams are move-only; they cannot be cloned or shared.
pub struct CipherStream {
    spec: AlgorithmSpec,
    direction: Direction,
    padding: Padding,
    engine: Engine,
    /// Input not yet handed to a block mode
    buffer: Zeroizing<Vec<u8>>,
    phase: Phase,
    bytes_in: usize,
    bytes_out: usize,
}

impl CipherStream {
    /// Validates key and IV and keys the primitive
    ///
    /// An empty `iv` is accepted only by algorithms whose IV length is 0.
    pub(crate) fn new(
        spec: AlgorithmSpec,
        direction: Direction,
        padding: Padding,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self> {
        validate::key_length(spec.name(), key.len(), spec.key_length())?;
        validate::iv_length(spec.name(), iv.len(), spec.iv_length())?;

        let engine = Engine::new(&spec, key, iv)?;
        tracing::debug!(
            algorithm = spec.name(),
            direction = direction.as_str(),
            padding = padding.is_enabled() && spec.requires_padding(),
            "cipher stream initialized"
        );

        Ok(Self {
            spec,
            direction,
            padding,
            engine,
            buffer: Zeroizing::new(Vec::with_capacity(spec.block_size())),
            phase: Phase::Active,
            bytes_in: 0,
            bytes_out: 0,
        })
    }

    pub fn spec(&self) -> AlgorithmSpec {
        self.spec
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Bytes currently held back, waiting for more input or `finish`
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Total bytes passed to `update` so far
    pub fn bytes_in(&self) -> usize {
        self.bytes_in
    }

    /// Total bytes returned so far
    pub fn bytes_out(&self) -> usize {
        self.bytes_out
    }

    fn padded(&self) -> bool {
        self.padding.is_enabled() && self.spec.requires_padding()
    }

    /// Bytes to keep back from `total` buffered bytes
    ///
    /// A padded decrypt always keeps the last complete block, since only
    /// `finish` knows it is the last one and may strip it.
    fn holdback(&self, total: usize) -> usize {
        let block_size = self.spec.block_size();
        let remainder = total % block_size;
        if self.direction == Direction::Decrypt && self.padded() && remainder == 0 {
            total.min(block_size)
        } else {
            remainder
        }
    }

    /// Feeds a chunk and returns the output it releases
    ///
    /// Zero-length chunks are allowed and release nothing new.
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        validate_stream_state(!self.is_finished(), "update", "finished")?;
        self.bytes_in += input.len();

        if !self.spec.mode().is_block_aligned() {
            let mut out = input.to_vec();
            self.engine.apply(self.direction, &mut out)?;
            self.bytes_out += out.len();
            tracing::trace!(algorithm = self.spec.name(), len = input.len(), "stream update");
            return Ok(out);
        }

        let total = self.buffer.len() + input.len();
        let release = total - self.holdback(total);
        if release == 0 {
            self.buffer.extend_from_slice(input);
            tracing::trace!(
                algorithm = self.spec.name(),
                len = input.len(),
                buffered = total,
                "stream update"
            );
            return Ok(Vec::new());
        }

        // A non-empty release is a whole number of blocks and always covers
        // the current buffer.
        let from_input = release - self.buffer.len();
        let mut out = Vec::with_capacity(release);
        out.extend_from_slice(&self.buffer);
        out.extend_from_slice(&input[..from_input]);
        self.buffer.clear();
        self.buffer.extend_from_slice(&input[from_input..]);

        self.engine.apply(self.direction, &mut out)?;
        self.bytes_out += out.len();
        tracing::trace!(
            algorithm = self.spec.name(),
            len = input.len(),
            released = out.len(),
            buffered = self.buffer.len(),
            "stream update"
        );
        Ok(out)
    }

    /// Ends the stream and returns the remaining output
    ///
    /// The stream is finished afterwards even if this fails.
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        validate_stream_state(!self.is_finished(), "finish", "finished")?;
        self.phase = Phase::Finished;

        let result = self.finish_inner();
        match &result {
            Ok(out) => {
                self.bytes_out += out.len();
                tracing::debug!(
                    algorithm = self.spec.name(),
                    direction = self.direction.as_str(),
                    bytes_in = self.bytes_in,
                    bytes_out = self.bytes_out,
                    "cipher stream finished"
                );
            }
            Err(e) => {
                tracing::debug!(
                    algorithm = self.spec.name(),
                    direction = self.direction.as_str(),
                    bytes_in = self.bytes_in,
                    error = e.kind(),
                    "cipher stream failed at finish"
                );
            }
        }
        result
    }

    fn finish_inner(&mut self) -> Result<Vec<u8>> {
        if !self.spec.mode().is_block_aligned() {
            return Ok(Vec::new());
        }

        let block_size = self.spec.block_size();
        let mut data = Zeroizing::new(core::mem::take(&mut *self.buffer));

        match (self.direction, self.padded()) {
            (Direction::Encrypt, true) => {
                pkcs7::pad(&mut data, block_size)?;
                self.engine.apply(self.direction, &mut data)?;
            }
            (Direction::Decrypt, true) => {
                if data.len() != block_size {
                    return Err(Error::InvalidInputLength {
                        context: "padded ciphertext",
                        block_size,
                        actual: self.bytes_in,
                    });
                }
                self.engine.apply(self.direction, &mut data)?;
                pkcs7::unpad(&mut data, block_size)?;
            }
            (_, false) => {
                if !data.is_empty() {
                    return Err(Error::InvalidInputLength {
                        context: "unpadded input",
                        block_size,
                        actual: self.bytes_in,
                    });
                }
            }
        }

        Ok(core::mem::take(&mut *data))
    }
}

impl StreamingOperation for CipherStream {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        CipherStream::update(self, input)
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        CipherStream::finish(self)
    }

    fn is_finished(&self) -> bool {
        CipherStream::is_finished(self)
    }
}

impl fmt::Debug for CipherStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherStream")
            .field("algorithm", &self.spec.name())
            .field("direction", &self.direction)
            .field("padding", &self.padding)
            .field("phase", &self.phase)
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}
