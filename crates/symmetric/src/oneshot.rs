//! One-shot encryption and decryption
//!
//! Each call runs a private stream through init, a single update and finish,
//! so the result is byte-identical to driving a stream by hand with any
//! split of the same input.

use alloc::vec::Vec;

use ciphra_api::Direction;
use zeroize::Zeroizing;

use crate::context::CipherContext;
use crate::error::Result;

/// Encrypts `data` with a fresh stream
pub fn encrypt(ctx: &CipherContext, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    run(ctx, Direction::Encrypt, data, key, iv)
}

/// Decrypts `data` with a fresh stream
///
/// On failure no partial plaintext is returned.
pub fn decrypt(ctx: &CipherContext, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    run(ctx, Direction::Decrypt, data, key, iv)
}

fn run(
    ctx: &CipherContext,
    direction: Direction,
    data: &[u8],
    key: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>> {
    let mut stream = ctx.init(direction, key, iv)?;
    let mut out = Zeroizing::new(stream.update(data)?);
    let tail = stream.finish()?;
    out.extend_from_slice(&tail);
    Ok(core::mem::take(&mut *out))
}
