//! ChaCha20 stream cipher implementation
//!
//! This module implements the ChaCha20 stream cipher as defined in RFC 8439.

use byteorder::{ByteOrder, LittleEndian};
use ciphra_params::utils::symmetric::{CHACHA20_COUNTER_SIZE, CHACHA20_IV_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Result};

pub use ciphra_params::utils::symmetric::{
    CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE,
};

/// ChaCha20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// The key schedule
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u32,
}

impl ChaCha20 {
    /// Creates a ChaCha20 instance whose first keystream block is `counter`
    pub fn with_counter(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        let mut state = [0u32; 16];

        // "expand 32-byte k" in little-endian
        state[0] = 0x61707865;
        state[1] = 0x3320646e;
        state[2] = 0x79622d32;
        state[3] = 0x6b206574;

        for i in 0..8 {
            state[4 + i] = LittleEndian::read_u32(&key[i * 4..]);
        }

        state[12] = counter;

        state[13] = LittleEndian::read_u32(&nonce[0..4]);
        state[14] = LittleEndian::read_u32(&nonce[4..8]);
        state[15] = LittleEndian::read_u32(&nonce[8..12]);

        Self {
            state,
            buffer: [0; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE, // Force initial keystream generation
            counter,
        }
    }

    /// Creates a ChaCha20 instance from a key slice and a 16-byte IV
    ///
    /// The IV is laid out as a 4-byte little-endian initial block counter
    /// followed by the 12-byte RFC 8439 nonce, the layout OpenSSL uses for
    /// its `chacha20` cipher.
    pub fn from_iv(key: &[u8], iv: &[u8]) -> Result<Self> {
        validate::key_length("ChaCha20", key.len(), CHACHA20_KEY_SIZE)?;
        validate::iv_length("ChaCha20", iv.len(), CHACHA20_IV_SIZE)?;

        let mut key_bytes = Zeroizing::new([0u8; CHACHA20_KEY_SIZE]);
        key_bytes.copy_from_slice(key);
        let mut nonce = [0u8; CHACHA20_NONCE_SIZE];
        nonce.copy_from_slice(&iv[CHACHA20_COUNTER_SIZE..]);
        let counter = LittleEndian::read_u32(&iv[..CHACHA20_COUNTER_SIZE]);

        Ok(Self::with_counter(&key_bytes, &nonce, counter))
    }

    /// The ChaCha20 quarter round function
    #[inline]
    fn quarter_round(state: &mut [u32], a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }

    /// Generate a block of keystream
    fn generate_keystream(&mut self) {
        let mut working_state = Zeroizing::new(self.state);
        working_state[12] = self.counter;

        // 20 rounds of ChaCha20: 10 column rounds, 10 diagonal rounds
        for _ in 0..10 {
            Self::quarter_round(&mut working_state[..], 0, 4, 8, 12);
            Self::quarter_round(&mut working_state[..], 1, 5, 9, 13);
            Self::quarter_round(&mut working_state[..], 2, 6, 10, 14);
            Self::quarter_round(&mut working_state[..], 3, 7, 11, 15);

            Self::quarter_round(&mut working_state[..], 0, 5, 10, 15);
            Self::quarter_round(&mut working_state[..], 1, 6, 11, 12);
            Self::quarter_round(&mut working_state[..], 2, 7, 8, 13);
            Self::quarter_round(&mut working_state[..], 3, 4, 9, 14);
        }

        for i in 0..16 {
            let original = if i == 12 { self.counter } else { self.state[i] };
            LittleEndian::write_u32(
                &mut self.buffer[i * 4..],
                working_state[i].wrapping_add(original),
            );
        }

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// XORs the keystream into `data`, continuing from the current position
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= CHACHA20_BLOCK_SIZE {
                self.generate_keystream();
            }

            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChaCha20")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
