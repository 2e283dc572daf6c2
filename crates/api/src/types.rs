//! Small value types shared across the cipher layers

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl Direction {
    /// Lowercase name, as used in logs and configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding scheme applied by block modes at finish
///
/// Stream-like modes ignore this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Padding {
    /// PKCS#7: N bytes of value N, always at least one byte
    #[default]
    Pkcs7,
    /// No padding; the total input must be block aligned
    None,
}

impl Padding {
    pub const fn is_enabled(self) -> bool {
        matches!(self, Padding::Pkcs7)
    }
}
