//! Simple Moving Average (SMA) kernel

use crate::error::IndicatorError;
use crate::statistics::average;

/// Validates a kernel period against the input length.
///
/// Kernels accept `period == len` (a single output); only `period <= 1` and
/// `period > len` are rejected.
pub(crate) fn check_kernel_period(
    kernel: &str,
    period: usize,
    len: usize,
) -> Result<(), IndicatorError> {
    if period <= 1 {
        return Err(IndicatorError::invalid_parameter(
            kernel,
            format!("period must be greater than 1, got {period}"),
        ));
    }
    if period > len {
        return Err(IndicatorError::invalid_parameter(
            kernel,
            format!("period ({period}) exceeds the data length ({len})"),
        ));
    }
    Ok(())
}

/// Simple moving average.
///
/// Output `i` is the arithmetic mean of `values[i .. i + period]`, so the
/// result has `len - period + 1` elements and is aligned to the input's tail.
pub fn sma(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    check_kernel_period("SMA", period, values.len())?;
    Ok(values.windows(period).map(average).collect())
}
