// Exercises the public surface through the `ciphra` facade
use std::io::{Read, Write};

use ciphra::prelude::*;
use ciphra::symmetric::{decrypt_stream, encrypt_stream, CipherFilterConfig};
use ciphra_tests::{init_tracing, seeded_bytes};
use hex_literal::hex;

const KEY: [u8; 32] = [b'x'; 32];
const IV: [u8; 16] = [b'i'; 16];

#[test]
fn test_test_data_scenario() {
    init_tracing();
    let ctx = CipherContext::from_name("aes-256-cbc").unwrap();

    let ciphertext = ctx.encrypt(b"TestData", &KEY, &IV).unwrap();
    assert_eq!(ciphertext, hex!("94e846e896b5e758aa526c0f4b2f088d"));
    assert_eq!(ctx.decrypt(&ciphertext, &KEY, &IV).unwrap(), b"TestData");

    let mut stream = ctx.encrypt_init(&KEY, &IV).unwrap();
    let mut streamed = stream.update(b"Test").unwrap();
    streamed.extend(stream.update(b"Data").unwrap());
    streamed.extend(stream.finish().unwrap());
    assert_eq!(streamed, ciphertext);
}

#[test]
fn test_empty_plaintext_pads_to_one_block() {
    let ctx = CipherContext::from_name("aes-256-cbc").unwrap();
    let ciphertext = ctx.encrypt(b"", &KEY, &IV).unwrap();
    assert_eq!(ciphertext, hex!("59e878e5c436b0e16690de09de57e052"));
    assert!(ctx.decrypt(&ciphertext, &KEY, &IV).unwrap().is_empty());
}

#[test]
fn test_registry_queries() {
    assert!(ciphra::has_algorithm("aes-256-cbc"));
    assert!(ciphra::has_algorithm("aes-128-ctr"));
    assert!(ciphra::has_algorithm("chacha20"));
    assert!(!ciphra::has_algorithm("aes-256-gcm"));

    let ctx = CipherContext::from_params(CipherFamily::Aes, CipherMode::Cfb, 256).unwrap();
    assert_eq!(ctx.algorithm_name(), "aes-256-cfb");
    assert_eq!((ctx.key_length(), ctx.iv_length(), ctx.block_size()), (32, 16, 1));
}

#[test]
fn test_tampered_padding_is_detected() {
    let ctx = CipherContext::from_name("aes-256-cbc").unwrap();
    let mut ciphertext = ctx.encrypt(&seeded_bytes(40, 5), &KEY, &IV).unwrap();
    // Flipping the last byte of the second-to-last block flips the last
    // plaintext byte, turning padding 0x08 into 0x09.
    ciphertext[31] ^= 0x08 ^ 0x09;
    assert!(matches!(
        ctx.decrypt(&ciphertext, &KEY, &IV),
        Err(Error::PaddingError { .. })
    ));
}

#[test]
fn test_session_refuses_overlapping_streams() {
    let mut cipher = Cipher::new("aes-128-cbc").unwrap();
    cipher.encrypt_init(&KEY[..16], &IV).unwrap();
    assert!(matches!(
        cipher.encrypt_init(&KEY[..16], &IV),
        Err(Error::InvalidState { .. })
    ));

    cipher.update(b"some data").unwrap();
    let ciphertext = cipher.finish().unwrap();
    assert_eq!(cipher.state(), SessionState::Finished);

    cipher.decrypt_init(&KEY[..16], &IV).unwrap();
    assert_eq!(cipher.state(), SessionState::Active(Direction::Decrypt));
    let mut plain = cipher.update(&ciphertext).unwrap();
    plain.extend(cipher.finish().unwrap());
    assert_eq!(plain, b"some data");
}

#[test]
fn test_io_adapters_match_one_shot() {
    let ctx = CipherContext::from_name("aes-192-ofb").unwrap();
    let key = seeded_bytes(24, 11);
    let data = seeded_bytes(50_000, 12);
    let expected = ctx.encrypt(&data, &key, &IV).unwrap();

    let mut writer = CipherWriter::new(Vec::new(), ctx.encrypt_init(&key, &IV).unwrap());
    for piece in data.chunks(777) {
        writer.write_all(piece).unwrap();
    }
    assert_eq!(writer.finish().unwrap(), expected);

    let mut reader = CipherReader::new(expected.as_slice(), ctx.decrypt_init(&key, &IV).unwrap());
    let mut plain = Vec::new();
    reader.read_to_end(&mut plain).unwrap();
    assert_eq!(plain, data);

    let mut copied = Vec::new();
    let written = encrypt_stream(&ctx, &key, &IV, data.as_slice(), &mut copied).unwrap();
    assert_eq!(written, data.len() as u64);
    assert_eq!(copied, expected);

    let mut back = Vec::new();
    decrypt_stream(&ctx, &key, &IV, copied.as_slice(), &mut back).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_filter_config_from_toml() {
    let text = r#"
        action = "encrypt"
        algorithm = "aes"
        key_size = 256
        key = "7878787878787878787878787878787878787878787878787878787878787878"
        iv = "69696969696969696969696969696969"
    "#;
    let config: CipherFilterConfig = toml::from_str(text).unwrap();
    assert_eq!(config.spec().unwrap().name(), "aes-256-cbc");

    let mut stream = config.build().unwrap();
    let mut out = stream.update(b"TestData").unwrap();
    out.extend(stream.finish().unwrap());
    assert_eq!(out, hex!("94e846e896b5e758aa526c0f4b2f088d"));
}

#[test]
fn test_spec_serializes_as_name() {
    let spec = ciphra::symmetric::resolve("AES256").unwrap();
    assert_eq!(serde_json::to_string(&spec).unwrap(), "\"aes-256-cbc\"");
    let back: AlgorithmSpec = serde_json::from_str("\"aes-128-ofb\"").unwrap();
    assert_eq!(back.mode(), CipherMode::Ofb);
    assert!(serde_json::from_str::<AlgorithmSpec>("\"aes-128-xts\"").is_err());
}
