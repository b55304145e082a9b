// Benchmarks for the hot generator paths: the raw step, scalar
// derivations, and shuffle at a typical inventory size.

use criterion::{criterion_group, criterion_main, Criterion};
use mudcore_prng::{Seed, SeedState, sanitize_seed, shuffle};
use std::hint::black_box;

fn bench_step(c: &mut Criterion) {
    let start = sanitize_seed(Seed::Int(42)).expect("valid seed");
    c.bench_function("step", |b| {
        b.iter(|| {
            let mut s = black_box(start);
            for _ in 0..1_000 {
                let (next, raw) = s.step();
                black_box(raw);
                s = next;
            }
            s
        })
    });
}

fn bench_uniform_int(c: &mut Criterion) {
    let start = sanitize_seed(Seed::Int(42)).expect("valid seed");
    c.bench_function("uniform_int", |b| {
        b.iter(|| {
            let mut s = black_box(start);
            for _ in 0..1_000 {
                let (next, v) = s.uniform_int(100).expect("n > 0");
                black_box(v);
                s = next;
            }
            s
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let start: SeedState = sanitize_seed(Seed::Int(42)).expect("valid seed");
    let items: Vec<u32> = (0..64).collect();
    c.bench_function("shuffle_64", |b| {
        b.iter(|| shuffle(black_box(start), black_box(&items)))
    });
}

criterion_group!(benches, bench_step, bench_uniform_int, bench_shuffle);
criterion_main!(benches);
