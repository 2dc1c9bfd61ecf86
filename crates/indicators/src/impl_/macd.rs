//! MACD (Moving Average Convergence Divergence) indicator
//!
//! ## Components
//!
//! - **MACD Line**: EMA(fast) - EMA(slow), aligned to the slow EMA
//! - **Signal Line**: EMA of the MACD line
//! - **Histogram**: MACD line (aligned to the signal) - signal line
//!
//! When the fast period is larger than the slow period the two are swapped
//! internally and the MACD line is negated, so the sign still reflects the
//! caller's ordering. Signal and histogram are taken from the negated line.

use chartcalc_types::PriceSeries;

use crate::error::{IndicatorError, check_length, check_period};
use crate::impl_::ema::ema;
use crate::traits::{AlignedSeries, Indicator, IndicatorOutput, IntoOutput};

/// MACD result containing MACD line, signal line, and histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdResult {
    /// MACD line, `len - slow + 1` values
    pub macd: Vec<f64>,
    /// Signal line, `macd.len() - smoothing + 1` values
    pub signal: Vec<f64>,
    /// Histogram, same length as the signal line
    pub histogram: Vec<f64>,
}

impl IntoOutput for MacdResult {
    fn into_output(self, x: &[f64], usable_len: usize) -> IndicatorOutput {
        IndicatorOutput::Macd {
            macd: AlignedSeries::align(x, usable_len, self.macd),
            signal: AlignedSeries::align(x, usable_len, self.signal),
            histogram: AlignedSeries::align(x, usable_len, self.histogram),
        }
    }
}

/// Calculates MACD over raw close prices.
pub fn macd(
    close: &[f64],
    fast_period: usize,
    slow_period: usize,
    smoothing_period: usize,
) -> Result<MacdResult, IndicatorError> {
    check_period("MACD", "fast period", fast_period)?;
    check_period("MACD", "slow period", slow_period)?;
    check_period("MACD", "smoothing period", smoothing_period)?;

    let (fast, slow, negate) = if fast_period > slow_period {
        (slow_period, fast_period, true)
    } else {
        (fast_period, slow_period, false)
    };
    check_length("MACD", "slow period", slow, close.len())?;

    let fast_ema = ema(close, fast)?;
    let slow_ema = ema(close, slow)?;
    let offset = slow - fast;

    let mut macd: Vec<f64> = slow_ema
        .iter()
        .zip(&fast_ema[offset..])
        .map(|(s, f)| f - s)
        .collect();

    if negate {
        for value in &mut macd {
            *value = -*value;
        }
    }

    if smoothing_period > macd.len() {
        return Err(IndicatorError::invalid_parameter(
            "MACD",
            format!(
                "smoothing period ({smoothing_period}) exceeds the MACD line length ({})",
                macd.len()
            ),
        ));
    }
    let signal = ema(&macd, smoothing_period)?;
    let histogram: Vec<f64> = macd[smoothing_period - 1..]
        .iter()
        .zip(&signal)
        .map(|(m, s)| m - s)
        .collect();

    Ok(MacdResult {
        macd,
        signal,
        histogram,
    })
}

/// Moving Average Convergence Divergence
#[derive(Debug, Clone, PartialEq)]
pub struct MACD {
    /// Fast EMA period
    pub fast_period: usize,
    /// Slow EMA period
    pub slow_period: usize,
    /// Signal line EMA period
    pub smoothing_period: usize,
}

impl MACD {
    /// Default fast period.
    pub const DEFAULT_FAST: usize = 12;
    /// Default slow period.
    pub const DEFAULT_SLOW: usize = 26;
    /// Default smoothing period.
    pub const DEFAULT_SMOOTHING: usize = 9;

    /// Creates a new MACD indicator.
    pub fn new(
        fast_period: usize,
        slow_period: usize,
        smoothing_period: usize,
    ) -> Result<Self, IndicatorError> {
        check_period("MACD", "fast period", fast_period)?;
        check_period("MACD", "slow period", slow_period)?;
        check_period("MACD", "smoothing period", smoothing_period)?;
        Ok(Self {
            fast_period,
            slow_period,
            smoothing_period,
        })
    }
}

impl Indicator for MACD {
    type Output = MacdResult;

    fn name(&self) -> &'static str {
        "MACD"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.close.len()
    }

    fn warmup_periods(&self) -> usize {
        self.fast_period.max(self.slow_period) - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<MacdResult, IndicatorError> {
        macd(
            &series.close,
            self.fast_period,
            self.slow_period,
            self.smoothing_period,
        )
    }
}
