#[macro_use]
extern crate criterion;
extern crate libbalance;

use criterion::{black_box, Criterion};
use libbalance::{_binary_gcd, _euclidean_gcd, coefficient_gcd};

const INPUT: [(u64, u64); 3] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
];

fn bench_binary_gcd(c: &mut Criterion) {
    c.bench_function("binary_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _binary_gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_euclidean_gcd(c: &mut Criterion) {
    c.bench_function("euclidean_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _euclidean_gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_coefficient_gcd(c: &mut Criterion) {
    c.bench_function("coefficient_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                coefficient_gcd(black_box(*u as f64), black_box(-(*v as f64)));
            }
        })
    });
}

criterion_group!(
    gcd_benches,
    bench_binary_gcd,
    bench_euclidean_gcd,
    bench_coefficient_gcd
);
criterion_main!(gcd_benches);
