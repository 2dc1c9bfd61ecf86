use chartcalc_types::PriceSeries;
use proptest::prelude::*;

/// Close prices in a forex-like range.
pub fn close_prices(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..2.0, len)
}

/// Consistent high/low/close bars: `low <= close <= high`, never flat.
pub fn hlc_series(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = PriceSeries> {
    prop::collection::vec((1.0f64..2.0, 0.0001..0.01, 0.0f64..=1.0), len).prop_map(|bars| {
        let mut high = Vec::with_capacity(bars.len());
        let mut low = Vec::with_capacity(bars.len());
        let mut close = Vec::with_capacity(bars.len());
        for (base, spread, position) in bars {
            let lo = base - spread;
            let hi = base + spread;
            high.push(hi);
            low.push(lo);
            close.push(lo + (hi - lo) * position);
        }
        PriceSeries::from_hlc(high, low, close)
    })
}
