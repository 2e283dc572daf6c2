//! Declarative cipher filters
//!
//! A [`CipherFilterConfig`] names an algorithm the way a config file would
//! (family, optional mode and key size, hex key material) and turns into a
//! ready [`CipherStream`] or an io adapter around one.
//!
//! ```toml
//! action = "encrypt"
//! algorithm = "aes"
//! mode = "ctr"
//! key_size = 256
//! key = "000102...1f"
//! iv = "f0f1...ff"
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use ciphra_api::{Direction, Padding};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::context::CipherContext;
use crate::error::{Error, Result};
use crate::registry::{self, AlgorithmSpec};
use crate::stream::CipherStream;

/// What a filter does to the bytes passing through it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Encrypt,
    Decrypt,
}

impl From<Action> for Direction {
    fn from(action: Action) -> Self {
        match action {
            Action::Encrypt => Direction::Encrypt,
            Action::Decrypt => Direction::Decrypt,
        }
    }
}

/// Serializable description of one cipher operation
///
/// `key` and `iv` are hex strings. The `Debug` output never shows them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherFilterConfig {
    pub action: Action,
    /// Registry name (`aes-256-cbc`) or bare family (`aes`)
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<usize>,
    pub key: String,
    #[serde(default)]
    pub iv: String,
    #[serde(default)]
    pub padding: Padding,
}

impl CipherFilterConfig {
    /// Resolves the algorithm without touching key material
    pub fn spec(&self) -> Result<AlgorithmSpec> {
        registry::resolve_params(&self.algorithm, self.mode.as_deref(), self.key_size)
    }

    pub fn context(&self) -> Result<CipherContext> {
        Ok(CipherContext::from_spec(self.spec()?).with_padding(self.padding))
    }

    /// Decodes key and IV and starts the stream
    ///
    /// Malformed hex is `InvalidParameter`; wrong lengths are reported by
    /// init as usual.
    pub fn build(&self) -> Result<CipherStream> {
        let ctx = self.context()?;
        let key = decode_hex("key", &self.key)?;
        let iv = decode_hex("iv", &self.iv)?;
        ctx.init(self.action.into(), &key, &iv)
    }

    #[cfg(feature = "std")]
    pub fn writer<W: std::io::Write>(&self, writer: W) -> Result<crate::io::CipherWriter<W>> {
        Ok(crate::io::CipherWriter::new(writer, self.build()?))
    }

    #[cfg(feature = "std")]
    pub fn reader<R: std::io::Read>(&self, reader: R) -> Result<crate::io::CipherReader<R>> {
        Ok(crate::io::CipherReader::new(reader, self.build()?))
    }
}

fn decode_hex(context: &'static str, value: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex::decode(value.trim())
        .map(Zeroizing::new)
        .map_err(|e| Error::param(context, alloc::format!("invalid hex: {}", e)))
}

impl fmt::Debug for CipherFilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherFilterConfig")
            .field("action", &self.action)
            .field("algorithm", &self.algorithm)
            .field("mode", &self.mode)
            .field("key_size", &self.key_size)
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .field("padding", &self.padding)
            .finish()
    }
}

impl Drop for CipherFilterConfig {
    fn drop(&mut self) {
        self.key.zeroize();
        self.iv.zeroize();
    }
}
