//! `std::io` adapters
//!
//! [`CipherWriter`] encrypts or decrypts everything written through it,
//! [`CipherReader`] does the same for everything read through it, and
//! [`encrypt_stream`] / [`decrypt_stream`] copy a reader into a writer.
//! All of them drive a [`CipherStream`], so their output is byte-identical
//! to the one-shot calls.

use std::io::{self, ErrorKind, Read, Write};

use ciphra_api::Direction;
use ciphra_params::utils::symmetric::STREAM_BUFFER_SIZE;
use zeroize::Zeroizing;

use crate::context::CipherContext;
use crate::error::{to_io_error, Error, Result, SymmetricResultExt};
use crate::stream::CipherStream;

/// Transforms bytes on their way into an inner writer
///
/// Call [`finish`](Self::finish) when done. Dropping the writer without it
/// loses the final block (and the padding check on decryption).
pub struct CipherWriter<W: Write> {
    writer: W,
    stream: CipherStream,
}

impl<W: Write> CipherWriter<W> {
    pub fn new(writer: W, stream: CipherStream) -> Self {
        Self { writer, stream }
    }

    pub fn stream(&self) -> &CipherStream {
        &self.stream
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Writes the final output, flushes and returns the inner writer
    pub fn finish(mut self) -> Result<W> {
        let tail = Zeroizing::new(self.stream.finish()?);
        self.writer.write_all(&tail).map_io_err("writing final block")?;
        self.writer.flush().map_io_err("flushing output")?;
        Ok(self.writer)
    }
}

impl<W: Write> Write for CipherWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let out = Zeroizing::new(self.stream.update(buf).map_err(to_io_error)?);
        self.writer.write_all(&out)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Transforms bytes on their way out of an inner reader
///
/// The stream is finished when the inner reader reports EOF. Cipher errors,
/// such as bad padding, surface as [`ErrorKind::InvalidData`] on that read
/// and on every read after it.
pub struct CipherReader<R: Read> {
    reader: R,
    stream: CipherStream,
    chunk: Zeroizing<Vec<u8>>,
    pending: Zeroizing<Vec<u8>>,
    pos: usize,
    failed: Option<Error>,
}

impl<R: Read> CipherReader<R> {
    pub fn new(reader: R, stream: CipherStream) -> Self {
        Self {
            reader,
            stream,
            chunk: Zeroizing::new(vec![0u8; STREAM_BUFFER_SIZE]),
            pending: Zeroizing::new(Vec::new()),
            pos: 0,
            failed: None,
        }
    }

    pub fn stream(&self) -> &CipherStream {
        &self.stream
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn refill(&mut self) -> io::Result<()> {
        self.pending = Zeroizing::new(Vec::new());
        self.pos = 0;
        if let Some(err) = &self.failed {
            return Err(to_io_error(err.clone()));
        }
        while self.pending.is_empty() && !self.stream.is_finished() {
            let n = match self.reader.read(&mut self.chunk) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let out = if n == 0 {
                self.stream.finish()
            } else {
                self.stream.update(&self.chunk[..n])
            };
            match out {
                Ok(out) => self.pending = Zeroizing::new(out),
                Err(err) => {
                    self.failed = Some(err.clone());
                    return Err(to_io_error(err));
                }
            }
        }
        Ok(())
    }
}

impl<R: Read> Read for CipherReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.pos == self.pending.len() {
            self.refill()?;
        }
        let available = &self.pending[self.pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Encrypts everything `reader` yields into `writer`
///
/// Returns the number of bytes written.
pub fn encrypt_stream<R: Read, W: Write>(
    ctx: &CipherContext,
    key: &[u8],
    iv: &[u8],
    reader: R,
    writer: W,
) -> Result<u64> {
    copy(ctx.init(Direction::Encrypt, key, iv)?, reader, writer)
}

/// Decrypts everything `reader` yields into `writer`
///
/// Plaintext is written as it is released, so on a padding error the
/// writer has already received everything but the last block.
pub fn decrypt_stream<R: Read, W: Write>(
    ctx: &CipherContext,
    key: &[u8],
    iv: &[u8],
    reader: R,
    writer: W,
) -> Result<u64> {
    copy(ctx.init(Direction::Decrypt, key, iv)?, reader, writer)
}

fn copy<R: Read, W: Write>(mut stream: CipherStream, mut reader: R, mut writer: W) -> Result<u64> {
    let mut buf = Zeroizing::new(vec![0u8; STREAM_BUFFER_SIZE]);
    let mut written = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).map_io_err("reading input"),
        };
        let out = Zeroizing::new(stream.update(&buf[..n])?);
        writer.write_all(&out).map_io_err("writing output")?;
        written += out.len() as u64;
    }

    let tail = Zeroizing::new(stream.finish()?);
    writer.write_all(&tail).map_io_err("writing final block")?;
    writer.flush().map_io_err("flushing output")?;
    written += tail.len() as u64;

    tracing::debug!(
        algorithm = stream.spec().name(),
        direction = stream.direction().as_str(),
        bytes = written,
        "stream copy complete"
    );
    Ok(written)
}
