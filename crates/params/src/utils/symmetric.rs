//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// IV size for the AES chaining and feedback modes (CBC, CFB, OFB, CTR)
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes (RFC 8439)
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 initial block counter size in bytes
pub const CHACHA20_COUNTER_SIZE: usize = 4;

/// ChaCha20 IV size in bytes: little-endian block counter followed by the nonce
pub const CHACHA20_IV_SIZE: usize = CHACHA20_COUNTER_SIZE + CHACHA20_NONCE_SIZE;

/// ChaCha20 keystream block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Buffer size used when streaming through readers and writers
pub const STREAM_BUFFER_SIZE: usize = 8192;
