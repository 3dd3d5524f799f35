//! Parse throughput for representative unavailability tokens.

use callboard_core::ConstraintParser;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const TOKENS: &[&str] = &[
    "m",
    "tues 2-4",
    "sun after 5pm",
    "w until 5:30 pm",
    "Jan 2 26",
    "1/2/2026",
    "Jan 2 26-Jan 5 2026",
    "Feb 2 2026 11am-3pm",
    "m, w 2-4, f after 5pm",
];

fn bench_parse(c: &mut Criterion) {
    let parser = ConstraintParser::new();

    c.bench_function("parse_mixed_tokens", |b| {
        b.iter(|| {
            for token in TOKENS {
                let _ = black_box(parser.parse(black_box(token)));
            }
        })
    });

    c.bench_function("parse_multi_spec_group", |b| {
        b.iter(|| black_box(parser.parse(black_box("m, w 2-4, f after 5pm, Jan 2 26"))))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
