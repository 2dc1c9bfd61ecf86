//! Average True Range (ATR) indicator with Wilder smoothing

use chartcalc_types::{PriceSeries, usable_len};

use crate::error::{IndicatorError, check_length, check_period};
use crate::statistics::average;
use crate::traits::Indicator;

/// Calculates True Range given the previous close.
///
/// TR = max(High - Low, |High - Prev_Close|, |Low - Prev_Close|)
#[inline]
fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Average True Range over raw high/low/close arrays.
///
/// The first true range has no previous close and is just `high - low`.
/// Seed is the mean of the first `period` true ranges, then
/// `ATR = (prev_ATR * (n-1) + TR) / n`. Returns `len - period + 1` values.
pub fn atr(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> Result<Vec<f64>, IndicatorError> {
    let len = usable_len(&[high, low, close]);
    check_period("ATR", "period", period)?;
    check_length("ATR", "period", period, len)?;

    let mut tr = Vec::with_capacity(len);
    tr.push(high[0] - low[0]);
    for i in 1..len {
        tr.push(true_range(high[i], low[i], close[i - 1]));
    }

    let n = period as f64;
    let mut result = Vec::with_capacity(len - period + 1);
    let mut prev = average(&tr[..period]);
    result.push(prev);

    for &value in &tr[period..] {
        prev = (prev * (n - 1.0) + value) / n;
        result.push(prev);
    }

    Ok(result)
}

/// Average True Range (Wilder)
#[derive(Debug, Clone, PartialEq)]
pub struct ATR {
    /// Number of periods for ATR calculation
    pub period: usize,
}

impl ATR {
    /// Default period.
    pub const DEFAULT_PERIOD: usize = 14;

    /// Creates a new ATR indicator with the given period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        check_period("ATR", "period", period)?;
        Ok(Self { period })
    }
}

impl Indicator for ATR {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "ATR"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.hlc_len()
    }

    fn warmup_periods(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<Vec<f64>, IndicatorError> {
        atr(&series.high, &series.low, &series.close, self.period)
    }
}
