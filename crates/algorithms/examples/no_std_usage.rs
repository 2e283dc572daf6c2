// This example uses only the allocation-based API of the primitives, the same
// surface that is available without std, even though it is compiled with std
// so it can print.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use ciphra_algorithms::{pkcs7, Aes, BlockCipher, BlockMode, Cbc, ChaCha20, Ctr, Error};

// Function to demonstrate CBC with PKCS#7 applied by hand
fn cbc_example() -> Result<Vec<u8>, Error> {
    let key = [0x11u8; 32]; // Would use proper key generation in real code
    let iv = [0x22u8; 16];
    let mut data = b"Hello, no_std world!".to_vec();

    pkcs7::pad(&mut data, 16)?;
    let mut cbc = Cbc::new(Aes::new(&key)?, &iv)?;
    cbc.encrypt(&mut data)?;
    Ok(data)
}

// Function to demonstrate that CTR state carries across calls
fn ctr_example() -> Result<bool, Error> {
    let key = [0x33u8; 16];
    let iv = [0x44u8; 16];
    let message = *b"split across two calls";

    let mut whole = message;
    Ctr::new(Aes::new(&key)?, &iv)?.encrypt(&mut whole)?;

    let mut pieces = message;
    let mut ctr = Ctr::new(Aes::new(&key)?, &iv)?;
    let (head, tail) = pieces.split_at_mut(5);
    ctr.encrypt(head)?;
    ctr.encrypt(tail)?;

    Ok(whole == pieces)
}

// Function to demonstrate ChaCha20 with the 16-byte counter||nonce IV
fn chacha20_example() -> Result<Vec<u8>, Error> {
    let key = [0x55u8; 32];
    let mut iv = [0u8; 16];
    iv[..4].copy_from_slice(&1u32.to_le_bytes());
    let mut data = b"ChaCha20 in no_std!".to_vec();

    ChaCha20::from_iv(&key, &iv)?.process(&mut data);
    Ok(data)
}

fn main() {
    println!("ciphra primitives no_std usage example");
    println!("======================================");

    match cbc_example() {
        Ok(ciphertext) => println!("AES-256-CBC ciphertext: {}", hex::encode(&ciphertext)),
        Err(e) => println!("CBC error: {}", e),
    }

    match ctr_example() {
        Ok(same) => println!("CTR piecewise output matches: {}", same),
        Err(e) => println!("CTR error: {}", e),
    }

    match chacha20_example() {
        Ok(ciphertext) => println!("ChaCha20 ciphertext: {}", hex::encode(&ciphertext)),
        Err(e) => println!("ChaCha20 error: {}", e),
    }
}
