// File: crates/api/src/traits/symmetric.rs

//! Streaming contract for incremental symmetric operations
//!
//! A streaming operation consumes input in arbitrary chunks and produces
//! output as soon as it can be released. The concatenation of every
//! `update` output followed by the `finish` output is independent of how
//! the input was chunked.

use alloc::vec::Vec;

use crate::types::Direction;
use crate::Result;

/// An incremental cipher transformation.
///
/// # Contract
/// - `update` may be called any number of times, including with empty input.
/// - `finish` is called at most once; afterwards both methods fail with
///   [`Error::InvalidState`](crate::Error::InvalidState).
/// - A failing `finish` still ends the operation.
pub trait StreamingOperation {
    /// Direction of the transformation.
    fn direction(&self) -> Direction;

    /// Feeds a chunk and returns the output it releases.
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>>;

    /// Feeds a chunk, appending the released output to `out`.
    ///
    /// Returns the number of bytes appended.
    fn update_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<usize> {
        let chunk = self.update(input)?;
        out.extend_from_slice(&chunk);
        Ok(chunk.len())
    }

    /// Ends the operation and returns the remaining output.
    fn finish(&mut self) -> Result<Vec<u8>>;

    /// Whether `finish` has been called.
    fn is_finished(&self) -> bool;
}
