// ============================================================================
// Dec128 Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Wide Integer - Uint128 multiply and 256/128 division
// 2. Arithmetic - Add, multiply, divide and square root on typical prices
// 3. Text - Parsing and stack-only rendering
// 4. Comparison - Dec128 against rust_decimal for the same workload
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dec128::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn d(s: &str) -> Dec128 {
    s.parse().unwrap()
}

// ============================================================================
// Wide Integer Benchmarks
// ============================================================================

fn benchmark_uint128(c: &mut Criterion) {
    let mut group = c.benchmark_group("uint128");

    let a = Uint128::from_u128(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210);
    let b = Uint128::from_u128(0x0000_0000_0000_0001_ffff_ffff_ffff_fff1);

    group.bench_function("mul_carry", |bench| {
        bench.iter(|| black_box(black_box(a).mul_carry(black_box(b))));
    });

    group.bench_function("quo_rem", |bench| {
        bench.iter(|| black_box(black_box(a).quo_rem(black_box(b))));
    });

    let (lo, carry) = a.mul_carry(b);
    let divisor = b.checked_add_u64(7).unwrap();
    group.bench_function("quo_rem_wide", |bench| {
        bench.iter(|| black_box(black_box(lo).quo_rem_wide(black_box(carry), divisor)));
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let cfg = DecimalConfig::default();

    let price = d("50123.45");
    let qty = d("0.0375");
    let fee = d("-0.0000001");

    group.bench_function("add_mixed_exponents", |bench| {
        bench.iter(|| black_box(black_box(price) + black_box(fee)));
    });

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(price) * black_box(qty)));
    });

    for prec in [6u8, 12, 19] {
        let cfg = DecimalConfig::new(prec).unwrap();
        group.bench_with_input(BenchmarkId::new("div", prec), &cfg, |bench, cfg| {
            bench.iter(|| black_box(black_box(price).div_with(black_box(qty), cfg)));
        });
        group.bench_with_input(BenchmarkId::new("sqrt", prec), &cfg, |bench, cfg| {
            bench.iter(|| black_box(black_box(price).sqrt_with(cfg)));
        });
    }

    group.bench_function("round_bank", |bench| {
        let x = price * qty;
        bench.iter(|| black_box(black_box(x).round_bank(2)));
    });

    group.bench_function("pow_int_negative", |bench| {
        bench.iter(|| black_box(black_box(qty).pow_int_with(-3, &cfg)));
    });

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for input in ["42", "50123.45", "-12345678901234567890.1234567890123456789"] {
        group.bench_with_input(BenchmarkId::new("parse", input.len()), input, |bench, s| {
            bench.iter(|| black_box(Dec128::parse_bytes(black_box(s.as_bytes()))));
        });
    }

    let x = d("-12345678901234567890.1234567890123456789");
    group.bench_function("format_trimmed", |bench| {
        bench.iter(|| black_box(black_box(x).format_trimmed()));
    });
    group.bench_function("format_json", |bench| {
        bench.iter(|| black_box(black_box(x).format_json()));
    });

    group.finish();
}

// ============================================================================
// Comparison Against rust_decimal
// Same invoice workload on both types
// ============================================================================

fn benchmark_vs_rust_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("invoice_total");

    let lines: Vec<(&str, i64)> = (0..100)
        .map(|i| if i % 2 == 0 { ("19.99", i) } else { ("0.0375", i) })
        .collect();

    let ours: Vec<(Dec128, Dec128)> = lines
        .iter()
        .map(|(p, q)| (d(p), Dec128::from(*q)))
        .collect();
    group.bench_function("dec128", |bench| {
        bench.iter(|| {
            let total: Dec128 = black_box(&ours).iter().map(|(p, q)| *p * *q).sum();
            black_box(total.round(2))
        });
    });

    let theirs: Vec<(Decimal, Decimal)> = lines
        .iter()
        .map(|(p, q)| (p.parse().unwrap(), Decimal::from(*q)))
        .collect();
    group.bench_function("rust_decimal", |bench| {
        bench.iter(|| {
            let total: Decimal = black_box(&theirs).iter().map(|(p, q)| p * q).sum();
            black_box(total.round_dp(2))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_uint128,
    benchmark_arithmetic,
    benchmark_text,
    benchmark_vs_rust_decimal,
);
criterion_main!(benches);
