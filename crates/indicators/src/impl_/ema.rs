//! Exponential Moving Average (EMA) kernel

use crate::error::IndicatorError;
use crate::impl_::sma::check_kernel_period;
use crate::statistics::average;

/// Smoothing factor `2 / (period + 1)`.
#[inline]
pub(crate) fn multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Exponential moving average seeded with the simple average of the first
/// `period` samples.
///
/// `ema[0] = mean(values[..period])`, then
/// `ema[i] = values[period - 1 + i] * k + ema[i - 1] * (1 - k)`.
/// The result has `len - period + 1` elements, like [`sma`](super::sma::sma).
pub fn ema(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    check_kernel_period("EMA", period, values.len())?;

    let k = multiplier(period);
    let mut result = Vec::with_capacity(values.len() - period + 1);
    let mut prev = average(&values[..period]);
    result.push(prev);

    for &value in &values[period..] {
        prev = value * k + prev * (1.0 - k);
        result.push(prev);
    }

    Ok(result)
}
