//! Cipher primitives with secure memory handling
//!
//! This crate provides the layer directly above the raw block permutation:
//! AES block ciphers behind a common trait, the confidentiality modes of
//! NIST SP 800-38A (ECB, CBC, CFB128, OFB, CTR), the ChaCha20 stream cipher
//! from RFC 8439 and PKCS#7 padding.
//!
//! Every mode keeps its chaining state between calls, so data may be fed in
//! arbitrary pieces as long as block modes receive whole blocks. The
//! buffering that turns arbitrary pieces into whole blocks lives in the
//! engine crate above this one.
//!
//! # Security Features
//!
//! - Chaining state, counters and keystream are zeroized on drop
//! - Padding is validated in constant time
//! - The AES round keys are zeroized by the `aes` crate on drop

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result, validate};

// Block cipher implementations
pub mod block;
pub use block::{Aes, Aes128, Aes192, Aes256, BlockCipher};
pub use block::modes::{BlockMode, Cbc, Cfb, Ctr, Ecb, Ofb};

// Padding schemes
pub mod padding;
pub use padding::pkcs7;

// Stream cipher implementations
pub mod stream;
pub use stream::ChaCha20;
