//! Block cipher modes of operation
//!
//! This module implements the confidentiality modes of NIST SP 800-38A:
//! ECB, CBC, CFB (128-bit feedback), OFB and CTR.
//!
//! Each mode owns its chaining state, so consecutive calls continue where the
//! previous call stopped. ECB and CBC only accept whole blocks; CFB, OFB and
//! CTR accept any length and keep their position inside the current
//! keystream block.

use crate::error::Result;

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

/// A block cipher mode with chaining state
pub trait BlockMode {
    /// Encrypts `data` in place, continuing from the current state
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()>;

    /// Decrypts `data` in place, continuing from the current state
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()>;
}
