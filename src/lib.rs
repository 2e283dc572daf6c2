//! # ciphra
//!
//! A streaming symmetric-cipher engine: a registry of named algorithms,
//! incremental and one-shot encryption with byte-identical output, PKCS#7
//! padding for the block modes and `std::io` adapters.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ciphra = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and the io adapters
//! - `symmetric` (default): registry, contexts and streams
//! - `algorithms`: the raw block ciphers, modes and ChaCha20
//! - `serde`: serialization of registry types and filter configurations
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ciphra-api`]: Error taxonomy, shared types, streaming trait
//! - [`ciphra-algorithms`]: AES, block modes, PKCS#7, ChaCha20
//! - [`ciphra-symmetric`]: Registry, contexts, streaming engine

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ciphra_api as api;
pub use ciphra_internal as internal;
pub use ciphra_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ciphra_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use ciphra_symmetric as symmetric;

#[cfg(feature = "symmetric")]
pub use ciphra_symmetric::has_algorithm;

/// Common imports for ciphra users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Direction, Error, Padding, Result, StreamingOperation};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        AlgorithmSpec, Cipher, CipherContext, CipherFamily, CipherMode, CipherStream,
        SessionState,
    };

    #[cfg(all(feature = "symmetric", feature = "std"))]
    pub use crate::symmetric::{CipherReader, CipherWriter};

    // Re-export security types
    pub use zeroize::{Zeroize, Zeroizing};
}
