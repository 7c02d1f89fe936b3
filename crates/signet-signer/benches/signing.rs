//! # Signing Benchmarks
//!
//! Cost of one sign and one unsign call per signer and digest. Every call
//! re-derives the key, so these numbers include two HMAC evaluations.
//!
//! ```bash
//! cargo bench --package signet-signer --bench signing
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use signet_signer::{DigestAlgorithm, Signer, SignerConfig, TimestampSigner};
use std::time::Duration;

const SECRET: &str = "bench-secret";

fn payload(size: usize) -> String {
    "x".repeat(size)
}

fn bench_signer(c: &mut Criterion) {
    let mut group = c.benchmark_group("signer");

    for digest in [DigestAlgorithm::Sha1, DigestAlgorithm::Sha256, DigestAlgorithm::Sha512] {
        let signer =
            Signer::with_config(SECRET, SignerConfig::default().with_digest(digest)).unwrap();

        for size in [16usize, 256, 4096] {
            let value = payload(size);
            let token = signer.sign(&value);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("sign/{digest}"), size),
                &value,
                |b, value| b.iter(|| signer.sign(black_box(value))),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("unsign/{digest}"), size),
                &token,
                |b, token| b.iter(|| signer.unsign(black_box(token)).is_ok()),
            );
        }
    }

    group.finish();
}

fn bench_timestamp_signer(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_signer");
    let signer = TimestampSigner::new(SECRET);
    let token = signer.sign(&payload(64));

    group.bench_function("sign", |b| b.iter(|| signer.sign(black_box("user-42"))));

    group.bench_function("unsign/max_age", |b| {
        b.iter(|| {
            signer
                .unsign(black_box(&token), Some(Duration::from_secs(3_600)))
                .is_ok()
        })
    });

    group.bench_function("unsign/forged", |b| {
        b.iter(|| signer.unsign(black_box("user-42.AAAA.forged"), None).is_err())
    });

    group.finish();
}

criterion_group!(benches, bench_signer, bench_timestamp_signer);
criterion_main!(benches);
