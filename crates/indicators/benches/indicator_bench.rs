//! Benchmarks for indicator implementations.
//!
//! Run with: `cargo bench -p chartcalc-indicators`

use std::hint::black_box;

use chartcalc_indicators::{
    ATR, IndicatorCache, IndicatorKind, MACD, RSI, Stochastic, ema, sma,
};
use chartcalc_types::PriceSeries;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn generate_prices(n: usize) -> Vec<f64> {
    // Simple LCG PRNG for reproducible prices
    let mut prices = Vec::with_capacity(n);
    let mut price = 100.0;
    let mut seed = 42u64;

    for _ in 0..n {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let upper_bits = u32::try_from(seed >> 33).unwrap_or(0);
        let random = f64::from(upper_bits) / f64::from(u32::MAX);

        // Price change: -1% to +1%
        let change = (random - 0.5) * 0.02;
        price *= 1.0 + change;
        prices.push(price);
    }

    prices
}

fn generate_series(n: usize) -> PriceSeries {
    let close = generate_prices(n);
    let high = close.iter().map(|c| c * 1.002).collect();
    let low = close.iter().map(|c| c * 0.998).collect();
    PriceSeries::from_hlc(high, low, close)
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kernels");

    for size in [1_000_usize, 10_000, 100_000] {
        let prices = generate_prices(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("SMA", size), &prices, |b, prices| {
            b.iter(|| sma(black_box(prices), black_box(20)));
        });
        group.bench_with_input(BenchmarkId::new("EMA", size), &prices, |b, prices| {
            b.iter(|| ema(black_box(prices), black_box(20)));
        });
    }

    group.finish();
}

fn bench_calculators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Calculators");
    let series = generate_series(100_000);
    group.throughput(Throughput::Elements(100_000));

    let kinds = [
        IndicatorKind::Atr(ATR::new(14).expect("valid period")),
        IndicatorKind::Rsi(RSI::new(14).expect("valid period")),
        IndicatorKind::Macd(MACD::new(12, 26, 9).expect("valid periods")),
        IndicatorKind::Stochastic(Stochastic::new(14, 3, 3).expect("valid periods")),
    ];

    for kind in &kinds {
        group.bench_with_input(BenchmarkId::from_parameter(kind.name()), kind, |b, kind| {
            b.iter(|| kind.compute(black_box(&series)));
        });
    }

    group.finish();
}

fn bench_cache_hit(c: &mut Criterion) {
    let series = generate_series(100_000);
    let mut cache = IndicatorCache::new(IndicatorKind::Rsi(RSI::new(14).expect("valid period")));
    cache.values(&series).expect("enough data");

    c.bench_function("Cache_Hit", |b| {
        b.iter(|| cache.values(black_box(&series)).map(|v| v.map(|s| s.len())));
    });
}

criterion_group!(benches, bench_kernels, bench_calculators, bench_cache_hit);
criterion_main!(benches);
