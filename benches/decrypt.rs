// benches/decrypt.rs
//! Decrypt-only benchmarks (pre-encoded blobs)

use crimsonkey_rs::aliases::PlainKey;
use crimsonkey_rs::{decrypt, encrypt_with, find_xor_candidate, Verbosity};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

// --- Size constants ---
const KB: usize = 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");

    let sizes = [16, 256, 4 * KB, 64 * KB];

    for &size in &sizes {
        // --- Pre-encode once (outside the timed loop) ---
        let key = PlainKey::new(vec![0x41u8; size]); // Repeating 'A'
        let encoded = encrypt_with(&key, 0x3c, 0xc4).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("size", format_size(size)),
            &size,
            |b, _| {
                b.iter(|| {
                    let recovered =
                        decrypt(black_box(encoded.as_slice()), Verbosity::Silent).unwrap();
                    black_box(recovered)
                });
            },
        );
    }

    group.finish();
}

fn bench_candidate_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_search");

    // Worst case for the ascending scan: the solution is 0xff
    group.bench_function("last_candidate", |b| {
        b.iter(|| find_xor_candidate(black_box(0xff), black_box(0x00)))
    });
    group.bench_function("first_candidate", |b| {
        b.iter(|| find_xor_candidate(black_box(0x5a), black_box(0x5a)))
    });

    group.finish();
}

criterion_group!(benches, bench_decrypt, bench_candidate_search);
criterion_main!(benches);
