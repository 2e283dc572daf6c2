//! Algorithm registry
//!
//! The registry is the only place where cipher names are looked up. Every
//! other layer works with [`AlgorithmSpec`], a closed description of one
//! supported family/mode/key-size combination that can only be obtained from
//! this module.
//!
//! Supported algorithms and their parameters:
//!
//! | name                    | key | iv | block |
//! |-------------------------|-----|----|-------|
//! | `aes-{128,192,256}-ecb` | 16/24/32 | 0  | 16 |
//! | `aes-{128,192,256}-cbc` | 16/24/32 | 16 | 16 |
//! | `aes-{128,192,256}-cfb` | 16/24/32 | 16 | 1  |
//! | `aes-{128,192,256}-ofb` | 16/24/32 | 16 | 1  |
//! | `aes-{128,192,256}-ctr` | 16/24/32 | 16 | 1  |
//! | `chacha20`              | 32  | 16 | 1     |
//!
//! Lookup is case-insensitive. `aes128`, `aes192` and `aes256` are accepted
//! as aliases of the CBC variants.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use ciphra_params::utils::symmetric::{AES_BLOCK_SIZE, AES_IV_SIZE, CHACHA20_IV_SIZE};

use crate::error::{Error, Result};

/// Cipher family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CipherFamily {
    /// AES (FIPS 197)
    Aes,
    /// ChaCha20 (RFC 8439)
    ChaCha20,
}

impl CipherFamily {
    /// Lowercase family name
    pub const fn as_str(self) -> &'static str {
        match self {
            CipherFamily::Aes => "aes",
            CipherFamily::ChaCha20 => "chacha20",
        }
    }

    /// Mode used when a family is named without one
    pub const fn default_mode(self) -> CipherMode {
        match self {
            CipherFamily::Aes => CipherMode::Cbc,
            CipherFamily::ChaCha20 => CipherMode::Stream,
        }
    }

    /// Key size used when a family is named without one, if it has only one
    pub const fn default_key_bits(self) -> Option<usize> {
        match self {
            CipherFamily::Aes => None,
            CipherFamily::ChaCha20 => Some(256),
        }
    }
}

impl fmt::Display for CipherFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("aes") {
            Ok(CipherFamily::Aes)
        } else if s.eq_ignore_ascii_case("chacha20") {
            Ok(CipherFamily::ChaCha20)
        } else {
            Err(Error::UnknownAlgorithm { name: s.to_string() })
        }
    }
}

/// Mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CipherMode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// Cipher feedback, 128-bit segments
    Cfb,
    /// Output feedback
    Ofb,
    /// Counter
    Ctr,
    /// Native stream cipher
    Stream,
}

impl CipherMode {
    /// Lowercase mode name
    pub const fn as_str(self) -> &'static str {
        match self {
            CipherMode::Ecb => "ecb",
            CipherMode::Cbc => "cbc",
            CipherMode::Cfb => "cfb",
            CipherMode::Ofb => "ofb",
            CipherMode::Ctr => "ctr",
            CipherMode::Stream => "stream",
        }
    }

    /// Whether the mode only processes whole blocks
    pub const fn is_block_aligned(self) -> bool {
        matches!(self, CipherMode::Ecb | CipherMode::Cbc)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        const MODES: [CipherMode; 6] = [
            CipherMode::Ecb,
            CipherMode::Cbc,
            CipherMode::Cfb,
            CipherMode::Ofb,
            CipherMode::Ctr,
            CipherMode::Stream,
        ];
        MODES
            .iter()
            .copied()
            .find(|mode| s.eq_ignore_ascii_case(mode.as_str()))
            .ok_or_else(|| Error::UnknownAlgorithm { name: s.to_string() })
    }
}

/// A supported cipher: family, mode and key size
///
/// Values only come from the registry, so every `AlgorithmSpec` names an
/// implemented algorithm and its parameters are always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub struct AlgorithmSpec {
    name: &'static str,
    family: CipherFamily,
    mode: CipherMode,
    key_bits: usize,
}

impl AlgorithmSpec {
    const fn entry(
        name: &'static str,
        family: CipherFamily,
        mode: CipherMode,
        key_bits: usize,
    ) -> Self {
        Self { name, family, mode, key_bits }
    }

    /// Canonical lowercase name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn family(&self) -> CipherFamily {
        self.family
    }

    pub const fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Key size in bits
    pub const fn key_bits(&self) -> usize {
        self.key_bits
    }

    /// Key length in bytes
    pub const fn key_length(&self) -> usize {
        self.key_bits / 8
    }

    /// IV length in bytes; 0 means the algorithm takes no IV
    pub const fn iv_length(&self) -> usize {
        match (self.family, self.mode) {
            (CipherFamily::Aes, CipherMode::Ecb) => 0,
            (CipherFamily::Aes, _) => AES_IV_SIZE,
            (CipherFamily::ChaCha20, _) => CHACHA20_IV_SIZE,
        }
    }

    /// Block size as reported to callers: the cipher block for ECB and CBC,
    /// 1 for every mode that produces output byte by byte
    pub const fn block_size(&self) -> usize {
        if self.mode.is_block_aligned() {
            AES_BLOCK_SIZE
        } else {
            1
        }
    }

    /// Whether PKCS#7 padding applies to this algorithm
    pub const fn requires_padding(&self) -> bool {
        self.mode.is_block_aligned()
    }
}

impl fmt::Display for AlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for AlgorithmSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}

impl TryFrom<String> for AlgorithmSpec {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        resolve(&name)
    }
}

impl From<AlgorithmSpec> for &'static str {
    fn from(spec: AlgorithmSpec) -> Self {
        spec.name
    }
}

use CipherFamily::{Aes, ChaCha20};
use CipherMode::{Cbc, Cfb, Ctr, Ecb, Ofb, Stream};

static ALGORITHMS: [AlgorithmSpec; 16] = [
    AlgorithmSpec::entry("aes-128-ecb", Aes, Ecb, 128),
    AlgorithmSpec::entry("aes-192-ecb", Aes, Ecb, 192),
    AlgorithmSpec::entry("aes-256-ecb", Aes, Ecb, 256),
    AlgorithmSpec::entry("aes-128-cbc", Aes, Cbc, 128),
    AlgorithmSpec::entry("aes-192-cbc", Aes, Cbc, 192),
    AlgorithmSpec::entry("aes-256-cbc", Aes, Cbc, 256),
    AlgorithmSpec::entry("aes-128-cfb", Aes, Cfb, 128),
    AlgorithmSpec::entry("aes-192-cfb", Aes, Cfb, 192),
    AlgorithmSpec::entry("aes-256-cfb", Aes, Cfb, 256),
    AlgorithmSpec::entry("aes-128-ofb", Aes, Ofb, 128),
    AlgorithmSpec::entry("aes-192-ofb", Aes, Ofb, 192),
    AlgorithmSpec::entry("aes-256-ofb", Aes, Ofb, 256),
    AlgorithmSpec::entry("aes-128-ctr", Aes, Ctr, 128),
    AlgorithmSpec::entry("aes-192-ctr", Aes, Ctr, 192),
    AlgorithmSpec::entry("aes-256-ctr", Aes, Ctr, 256),
    AlgorithmSpec::entry("chacha20", ChaCha20, Stream, 256),
];

static ALIASES: [(&str, &str); 3] = [
    ("aes128", "aes-128-cbc"),
    ("aes192", "aes-192-cbc"),
    ("aes256", "aes-256-cbc"),
];

fn lookup(name: &str) -> Option<AlgorithmSpec> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| name.eq_ignore_ascii_case(alias))
        .map_or(name, |(_, target)| *target);

    ALGORITHMS
        .iter()
        .find(|spec| canonical.eq_ignore_ascii_case(spec.name))
        .copied()
}

/// Whether `name` is a supported algorithm
pub fn has_algorithm(name: &str) -> bool {
    lookup(name).is_some()
}

/// Looks up an algorithm by name
pub fn resolve(name: &str) -> Result<AlgorithmSpec> {
    lookup(name).ok_or_else(|| {
        tracing::debug!(name, "unknown cipher algorithm");
        Error::UnknownAlgorithm { name: name.to_string() }
    })
}

/// Builds the spec for a family, mode and key size
pub fn make_spec(family: CipherFamily, mode: CipherMode, key_bits: usize) -> Result<AlgorithmSpec> {
    ALGORITHMS
        .iter()
        .find(|spec| spec.family == family && spec.mode == mode && spec.key_bits == key_bits)
        .copied()
        .ok_or(Error::UnsupportedCombination {
            family: family.as_str(),
            mode: mode.as_str(),
            key_bits,
        })
}

/// Resolves an algorithm from loosely specified parameters
///
/// With neither `mode` nor `key_bits`, `algorithm` is a full name as accepted
/// by [`resolve`]. Otherwise it names a family, and the missing parts fall
/// back to the family defaults: CBC for AES, and the only key size for
/// ChaCha20. AES without a key size is not a complete algorithm.
pub fn resolve_params(
    algorithm: &str,
    mode: Option<&str>,
    key_bits: Option<usize>,
) -> Result<AlgorithmSpec> {
    if mode.is_none() && key_bits.is_none() {
        return resolve(algorithm);
    }

    let family: CipherFamily = algorithm.parse()?;
    let mode = match mode {
        Some(mode) => mode.parse()?,
        None => family.default_mode(),
    };
    let key_bits = key_bits.or(family.default_key_bits()).unwrap_or(0);
    make_spec(family, mode, key_bits)
}

/// Every supported algorithm, in registry order
pub fn algorithms() -> impl Iterator<Item = AlgorithmSpec> {
    ALGORITHMS.iter().copied()
}
