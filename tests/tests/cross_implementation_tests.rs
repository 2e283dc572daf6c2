//! Cross-implementation tests against the RustCrypto `ctr` and `aes` crates

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use ciphra::symmetric::CipherContext;
use ciphra_tests::{random_chunks, seeded_bytes};
use ctr::cipher::{KeyIvInit, StreamCipher};

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
type Aes192Ctr = ctr::Ctr128BE<aes::Aes192>;
type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

fn reference_ctr(key: &[u8], iv: &[u8], data: &[u8]) -> Vec<u8> {
    let mut buf = data.to_vec();
    match key.len() {
        16 => Aes128Ctr::new_from_slices(key, iv).unwrap().apply_keystream(&mut buf),
        24 => Aes192Ctr::new_from_slices(key, iv).unwrap().apply_keystream(&mut buf),
        _ => Aes256Ctr::new_from_slices(key, iv).unwrap().apply_keystream(&mut buf),
    }
    buf
}

#[test]
fn test_aes_ctr_against_rustcrypto() {
    for (name, key_len) in [("aes-128-ctr", 16), ("aes-192-ctr", 24), ("aes-256-ctr", 32)] {
        let ctx = CipherContext::from_name(name).unwrap();
        for (i, len) in [0usize, 1, 15, 16, 17, 255, 4096].into_iter().enumerate() {
            let key = seeded_bytes(key_len, i as u64);
            let iv = seeded_bytes(16, 100 + i as u64);
            let data = seeded_bytes(len, 200 + i as u64);

            let expected = reference_ctr(&key, &iv, &data);
            assert_eq!(ctx.encrypt(&data, &key, &iv).unwrap(), expected, "{} len {}", name, len);

            let mut stream = ctx.encrypt_init(&key, &iv).unwrap();
            let chunks = random_chunks(&data, i as u64);
            let streamed = ciphra_tests::drive(&mut stream, &chunks).unwrap();
            assert_eq!(streamed, expected, "{} streamed len {}", name, len);
        }
    }
}

#[test]
fn test_aes_ctr_counter_wraps_like_rustcrypto() {
    // The low 64 bits overflow after the first block; the carry must reach
    // the upper half.
    let ctx = CipherContext::from_name("aes-128-ctr").unwrap();
    let key = [0x2bu8; 16];
    let mut iv = [0xffu8; 16];
    iv[0] = 0x00;
    let data = seeded_bytes(80, 42);

    assert_eq!(
        ctx.encrypt(&data, &key, &iv).unwrap(),
        reference_ctr(&key, &iv, &data)
    );
}

#[test]
fn test_aes_cbc_against_raw_block_cipher() {
    let key = seeded_bytes(32, 1);
    let iv = seeded_bytes(16, 2);
    let data = seeded_bytes(64, 3);

    let raw = aes::Aes256::new_from_slice(&key).unwrap();
    let mut chain = iv.clone();
    let mut expected = Vec::new();
    for block in data.chunks(16) {
        let mut b: Vec<u8> = block.iter().zip(&chain).map(|(p, c)| p ^ c).collect();
        raw.encrypt_block(GenericArray::from_mut_slice(&mut b));
        chain = b.clone();
        expected.extend(b);
    }

    let ctx = CipherContext::from_name("aes-256-cbc")
        .unwrap()
        .with_padding(ciphra::api::Padding::None);
    assert_eq!(ctx.encrypt(&data, &key, &iv).unwrap(), expected);
}
