//! Primitive dispatch
//!
//! One variant per mode. The variant is chosen once, at stream creation,
//! from the [`AlgorithmSpec`]; after that no names are looked at.

use ciphra_algorithms::{Aes, BlockCipher, BlockMode, Cbc, Cfb, ChaCha20, Ctr, Ecb, Ofb};
use ciphra_api::Direction;

use crate::error::{Error, Result};
use crate::registry::{AlgorithmSpec, CipherFamily, CipherMode};

/// Keyed primitive with its chaining state
pub(crate) enum Engine {
    Ecb(Ecb<Aes>),
    Cbc(Cbc<Aes>),
    Cfb(Cfb<Aes>),
    Ofb(Ofb<Aes>),
    Ctr(Ctr<Aes>),
    ChaCha20(ChaCha20),
}

impl Engine {
    /// Keys the primitive for `spec`
    ///
    /// Key and IV lengths are expected to be validated against `spec` already;
    /// the primitives check them again.
    pub(crate) fn new(spec: &AlgorithmSpec, key: &[u8], iv: &[u8]) -> Result<Self> {
        let engine = match (spec.family(), spec.mode()) {
            (CipherFamily::ChaCha20, _) => Engine::ChaCha20(ChaCha20::from_iv(key, iv)?),
            (CipherFamily::Aes, mode) => {
                let cipher = Aes::new(key)?;
                match mode {
                    CipherMode::Ecb => Engine::Ecb(Ecb::new(cipher)),
                    CipherMode::Cbc => Engine::Cbc(Cbc::new(cipher, iv)?),
                    CipherMode::Cfb => Engine::Cfb(Cfb::new(cipher, iv)?),
                    CipherMode::Ofb => Engine::Ofb(Ofb::new(cipher, iv)?),
                    CipherMode::Ctr => Engine::Ctr(Ctr::new(cipher, iv)?),
                    CipherMode::Stream => {
                        return Err(Error::UnsupportedCombination {
                            family: spec.family().as_str(),
                            mode: spec.mode().as_str(),
                            key_bits: spec.key_bits(),
                        })
                    }
                }
            }
        };
        Ok(engine)
    }

    /// Transforms `data` in place
    ///
    /// Block modes require `data` to be block aligned.
    pub(crate) fn apply(&mut self, direction: Direction, data: &mut [u8]) -> Result<()> {
        match self {
            Engine::ChaCha20(cipher) => {
                cipher.process(data);
                Ok(())
            }
            Engine::Ecb(mode) => run(mode, direction, data),
            Engine::Cbc(mode) => run(mode, direction, data),
            Engine::Cfb(mode) => run(mode, direction, data),
            Engine::Ofb(mode) => run(mode, direction, data),
            Engine::Ctr(mode) => run(mode, direction, data),
        }
    }
}

fn run<M: BlockMode>(mode: &mut M, direction: Direction, data: &mut [u8]) -> Result<()> {
    match direction {
        Direction::Encrypt => mode.encrypt(data)?,
        Direction::Decrypt => mode.decrypt(data)?,
    }
    Ok(())
}
