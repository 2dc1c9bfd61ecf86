//! Williams %R indicator

use chartcalc_types::{PriceSeries, usable_len};

use crate::error::{IndicatorError, check_length, check_period};
use crate::statistics::{maximum, minimum};
use crate::traits::Indicator;

/// Williams %R over raw high/low/close arrays.
///
/// `%R = (HighestHigh - Close) / (HighestHigh - LowestLow) * -100`, ranging
/// from -100 (close at the low) to 0 (close at the high). A window with no
/// range divides by zero and yields `NaN`.
pub fn williams_r(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> Result<Vec<f64>, IndicatorError> {
    let len = usable_len(&[high, low, close]);
    check_period("WILLIAMS_R", "period", period)?;
    check_length("WILLIAMS_R", "period", period, len)?;

    Ok(((period - 1)..len)
        .map(|i| {
            let start = i + 1 - period;
            let highest = maximum(&high[start..=i]);
            let lowest = minimum(&low[start..=i]);
            (highest - close[i]) / (highest - lowest) * -100.0
        })
        .collect())
}

/// Williams %R
#[derive(Debug, Clone, PartialEq)]
pub struct WilliamsR {
    /// Lookback window
    pub period: usize,
}

impl WilliamsR {
    /// Default period.
    pub const DEFAULT_PERIOD: usize = 14;

    /// Creates a new Williams %R indicator.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        check_period("WILLIAMS_R", "period", period)?;
        Ok(Self { period })
    }
}

impl Indicator for WilliamsR {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "WILLIAMS_R"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.hlc_len()
    }

    fn warmup_periods(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<Vec<f64>, IndicatorError> {
        williams_r(&series.high, &series.low, &series.close, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_williams_r_basic() {
        let high = [10.0, 12.0, 11.0, 13.0];
        let low = [8.0, 9.0, 9.5, 10.0];
        let close = [9.0, 11.0, 10.0, 13.0];

        let result = williams_r(&high, &low, &close, 3).unwrap();
        assert_eq!(result.len(), 2);

        // Window 0..=2: HH = 12, LL = 8, close = 10 -> (12-10)/(4) * -100 = -50
        assert_relative_eq!(result[0], -50.0, epsilon = 1e-10);
        // Window 1..=3: HH = 13, LL = 9, close = 13 -> 0
        assert_relative_eq!(result[1], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_williams_r_close_at_low() {
        let high = [5.0, 6.0, 7.0];
        let low = [4.0, 3.0, 2.0];
        let close = [4.5, 3.5, 2.0];

        let result = williams_r(&high, &low, &close, 2).unwrap();
        assert_relative_eq!(result[1], -100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_williams_r_flat_window_is_nan() {
        let values = [3.0; 5];
        let result = williams_r(&values, &values, &values, 2).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_williams_r_invalid() {
        let values = [1.0, 2.0];
        assert!(williams_r(&values, &values, &values, 2).is_err());
        assert!(WilliamsR::new(1).is_err());
    }
}
