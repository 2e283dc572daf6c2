//! Stream ciphers
//!
//! A stream cipher XORs a keystream into the data, so encryption and
//! decryption are the same operation. A key and nonce pair must never be
//! used for two messages.

pub mod chacha;

pub use chacha::chacha20::{ChaCha20, CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
