use ciphra::symmetric::CipherContext;
use ciphra_tests::seeded_bytes;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const ALGORITHMS: [&str; 4] = ["aes-128-cbc", "aes-256-cbc", "aes-256-ctr", "chacha20"];

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one-shot");

    for size in [16usize, 1024, 16384, 262144] {
        let data = seeded_bytes(size, 1);
        group.throughput(Throughput::Bytes(size as u64));

        for name in ALGORITHMS {
            let ctx = CipherContext::from_name(name).unwrap();
            let key = vec![0u8; ctx.key_length()];
            let iv = vec![0u8; ctx.iv_length()];
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| ctx.encrypt(data, &key, &iv).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked");
    let data = seeded_bytes(16384, 2);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [1usize, 15, 64, 4096] {
        for name in ALGORITHMS {
            let ctx = CipherContext::from_name(name).unwrap();
            let key = vec![0u8; ctx.key_length()];
            let iv = vec![0u8; ctx.iv_length()];
            group.bench_with_input(BenchmarkId::new(name, chunk), &chunk, |b, &chunk| {
                b.iter(|| {
                    let mut stream = ctx.encrypt_init(&key, &iv).unwrap();
                    let mut out = Vec::with_capacity(data.len() + 16);
                    for piece in data.chunks(chunk) {
                        out.extend(stream.update(piece).unwrap());
                    }
                    out.extend(stream.finish().unwrap());
                    out
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_chunked);
criterion_main!(benches);
