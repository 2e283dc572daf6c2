//! Testing utilities and benchmarks for the ciphra library
//!
//! Known-answer suites live under `vectors/` as TOML and are driven by
//! [`suites::kat`]. The helpers here are shared by the integration tests
//! and the benchmark.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

pub mod suites;

/// Installs a test-writer subscriber once per test binary
///
/// `RUST_LOG` takes the usual target syntax; the default shows the engine's
/// debug events.
#[allow(clippy::expect_used)]
pub fn init_tracing() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let targets = if let Ok(var) = std::env::var("RUST_LOG") {
            var.parse()
                .expect("Failed to parse RUST_LOG environment variable")
        } else {
            Targets::new().with_default(LevelFilter::DEBUG)
        };
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .finish()
            .with(targets)
            .init();
    });
}

/// Splits `data` at random points, including empty pieces
///
/// The same seed always yields the same split.
pub fn random_chunks(data: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let take = rng.gen_range(0..=rest.len().min(40));
        let (head, tail) = rest.split_at(take);
        chunks.push(head);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

/// Random bytes from a seeded generator
pub fn seeded_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill(out.as_mut_slice());
    out
}

/// Feeds `chunks` through a stream and concatenates everything it returns
pub fn drive<S: ciphra::api::StreamingOperation>(
    stream: &mut S,
    chunks: &[&[u8]],
) -> ciphra::api::Result<Vec<u8>> {
    let mut out = Vec::new();
    for chunk in chunks {
        stream.update_into(chunk, &mut out)?;
    }
    out.extend(stream.finish()?);
    Ok(out)
}
