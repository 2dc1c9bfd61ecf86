//! Relative Strength Index (RSI) indicator with Wilder smoothing

use chartcalc_types::PriceSeries;

use crate::error::{IndicatorError, check_length, check_period};
use crate::statistics::average;
use crate::traits::Indicator;

/// RSI from Wilder-smoothed average gain and loss.
///
/// A non-finite `RS` (zero average loss, or 0/0) is coerced to 0, so a
/// series with no losses reads 0 rather than 100. This is the only value the
/// engine clamps.
#[inline]
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let mut rs = avg_gain / avg_loss;
    if !rs.is_finite() {
        rs = 0.0;
    }
    100.0 - 100.0 / (1.0 + rs)
}

/// Relative Strength Index over raw close prices.
///
/// Close-to-close changes are split into gains and absolute losses. The
/// first averages are the simple means of the first `period` changes, then
/// `avg = (new + avg * (period - 1)) / period`. The first difference consumes
/// one extra sample, so the result has `len - period` values.
pub fn rsi(close: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    check_period("RSI", "period", period)?;
    check_length("RSI", "period", period, close.len())?;

    let changes: Vec<f64> = close.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

    let n = period as f64;
    let mut avg_gain = average(&gains[..period]);
    let mut avg_loss = average(&losses[..period]);

    let mut result = Vec::with_capacity(close.len() - period);
    result.push(rsi_value(avg_gain, avg_loss));

    for (gain, loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (gain + avg_gain * (n - 1.0)) / n;
        avg_loss = (loss + avg_loss * (n - 1.0)) / n;
        result.push(rsi_value(avg_gain, avg_loss));
    }

    Ok(result)
}

/// Relative Strength Index
#[derive(Debug, Clone, PartialEq)]
pub struct RSI {
    /// Smoothing period
    pub period: usize,
}

impl RSI {
    /// Default period.
    pub const DEFAULT_PERIOD: usize = 14;

    /// Creates a new RSI indicator.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        check_period("RSI", "period", period)?;
        Ok(Self { period })
    }
}

impl Indicator for RSI {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "RSI"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.close.len()
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> Result<Vec<f64>, IndicatorError> {
        rsi(&series.close, self.period)
    }
}
