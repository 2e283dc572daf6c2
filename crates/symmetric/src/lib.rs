//! Streaming symmetric encryption for the ciphra library
//!
//! This crate turns the primitives in `ciphra-algorithms` into a uniform
//! engine: a registry of named algorithms, contexts bound to one of them,
//! and streams that encrypt or decrypt input of any size in arbitrary
//! chunks with PKCS#7 padding for the block modes.
//!
//! ```no_run
//! use ciphra_symmetric::CipherContext;
//!
//! # fn main() -> ciphra_symmetric::Result<()> {
//! let ctx = CipherContext::from_name("aes-256-cbc")?;
//! let key = [b'x'; 32];
//! let iv = [b'i'; 16];
//!
//! let mut stream = ctx.encrypt_init(&key, &iv)?;
//! let mut ciphertext = stream.update(b"Test")?;
//! ciphertext.extend(stream.update(b"Data")?);
//! ciphertext.extend(stream.finish()?);
//!
//! assert_eq!(ciphertext, ctx.encrypt(b"TestData", &key, &iv)?);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cipher;
pub mod context;
mod engine;
pub mod error;
#[cfg(feature = "serde")]
pub mod filter;
#[cfg(feature = "std")]
pub mod io;
pub mod oneshot;
pub mod registry;
pub mod stream;

// Re-export main types for convenience
pub use cipher::{Cipher, SessionState};
pub use context::CipherContext;
#[cfg(feature = "serde")]
pub use filter::{Action, CipherFilterConfig};
#[cfg(feature = "std")]
pub use io::{decrypt_stream, encrypt_stream, CipherReader, CipherWriter};
pub use registry::{
    algorithms, has_algorithm, make_spec, resolve, resolve_params, AlgorithmSpec, CipherFamily,
    CipherMode,
};
pub use stream::CipherStream;

pub use ciphra_api::{Direction, Padding, StreamingOperation};

// Re-export the API error system instead of custom error types
pub use ciphra_api::error::{validate, Error, Result};
