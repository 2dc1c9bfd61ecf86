use chartcalc_types::{Candle, PriceSeries};

pub const DAY_NS: i64 = 86_400_000_000_000;

pub fn make_candle(timestamp_ns: i64, close: f64) -> Candle {
    Candle {
        timestamp_ns,
        open: close - 0.01,
        high: close + 0.02,
        low: close - 0.02,
        close,
        volume: 1.0,
    }
}

/// Daily candles starting at the Unix epoch.
pub fn daily_series(closes: &[f64]) -> PriceSeries {
    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, close)| make_candle(i as i64 * DAY_NS, *close))
        .collect();
    PriceSeries::from_candles(&candles)
}

/// Compares against reference values; `None` marks an expected non-finite value.
pub fn assert_series_close(label: &str, expected: &[Option<f64>], actual: &[f64], atol: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "{label}: length mismatch {} != {}",
        expected.len(),
        actual.len()
    );

    for (idx, (exp, act)) in expected.iter().zip(actual.iter()).enumerate() {
        match exp {
            None => assert!(!act.is_finite(), "{label}[{idx}] expected NaN, got {act}"),
            Some(value) => {
                assert!(act.is_finite(), "{label}[{idx}] expected finite, got {act}");
                let diff = (value - act).abs();
                assert!(diff <= atol, "{label}[{idx}] diff {diff} exceeds {atol}");
            }
        }
    }
}
