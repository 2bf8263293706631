// ============================================================================
// Dong Words Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decomposition - base-1000 group split only
// 2. Full Rendering - amounts of increasing width through the renderer
// 3. Style Comparison - colloquial, formal and southern presets
// 4. Input Parsing - amount field text to Amount
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use dong_words::domain::decompose;
use dong_words::prelude::*;

const AMOUNTS: [i64; 5] = [
    7,
    1_005,
    1_234_567,
    250_000_000_000,
    i64::MIN,
];

fn benchmark_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    for amount in AMOUNTS.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(amount),
            amount,
            |b, &amount| b.iter(|| black_box(decompose(black_box(amount).unsigned_abs()))),
        );
    }

    group.finish();
}

fn benchmark_spell_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_out");

    for amount in AMOUNTS.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(amount),
            amount,
            |b, &amount| b.iter(|| black_box(spell_out(black_box(amount)))),
        );
    }

    group.finish();
}

fn benchmark_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("styles");

    let styles = [
        ("colloquial", SpellingConfig::colloquial()),
        ("formal", SpellingConfig::formal()),
        ("southern", SpellingConfig::southern()),
    ];

    for (name, config) in styles {
        let renderer = NumeralRenderer::new(config);
        group.bench_function(name, |b| {
            b.iter(|| black_box(renderer.render(black_box(1_000_005_021))))
        });
    }

    group.finish();
}

fn benchmark_parse_input(c: &mut Criterion) {
    c.bench_function("parse_input", |b| {
        b.iter(|| black_box(Amount::parse_input(black_box("1.234.567.890 ₫"))))
    });
}

criterion_group!(
    benches,
    benchmark_decompose,
    benchmark_spell_out,
    benchmark_styles,
    benchmark_parse_input,
);
criterion_main!(benches);
