//! Stochastic Oscillator indicator
//!
//! ```text
//! %K_raw = (Close - LowestLow) / (HighestHigh - LowestLow) * 100
//! %K     = SMA(%K_raw, smoothing)      when smoothing > 1 (slow / full)
//! %D     = SMA(%K, d_period)
//! ```
//!
//! A window whose high equals its low divides by zero; the resulting `NaN`
//! or `inf` is passed through.

use chartcalc_types::{PriceSeries, usable_len};

use crate::error::{IndicatorError, check_length, check_period};
use crate::impl_::sma::sma;
use crate::statistics::{maximum, minimum};
use crate::traits::{AlignedSeries, Indicator, IndicatorOutput, IntoOutput};

/// Stochastic result containing %K and %D.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticResult {
    /// %K line
    pub k: Vec<f64>,
    /// %D line
    pub d: Vec<f64>,
}

impl IntoOutput for StochasticResult {
    fn into_output(self, x: &[f64], usable_len: usize) -> IndicatorOutput {
        IndicatorOutput::Stochastic {
            k: AlignedSeries::align(x, usable_len, self.k),
            d: AlignedSeries::align(x, usable_len, self.d),
        }
    }
}

fn check_smoothing(smoothing_period: usize) -> Result<(), IndicatorError> {
    if smoothing_period == 0 {
        return Err(IndicatorError::invalid_parameter(
            "STOCHASTIC",
            "smoothing period must be at least 1",
        ));
    }
    Ok(())
}

fn check_fits(name: &str, period: usize, available: usize) -> Result<(), IndicatorError> {
    if period > available {
        return Err(IndicatorError::invalid_parameter(
            "STOCHASTIC",
            format!("{name} ({period}) exceeds the available %K length ({available})"),
        ));
    }
    Ok(())
}

/// Calculates the stochastic oscillator over raw high/low/close arrays.
///
/// `smoothing_period == 1` gives the fast stochastic.
pub fn stochastic(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    k_period: usize,
    d_period: usize,
    smoothing_period: usize,
) -> Result<StochasticResult, IndicatorError> {
    let len = usable_len(&[high, low, close]);
    check_period("STOCHASTIC", "%K period", k_period)?;
    check_period("STOCHASTIC", "%D period", d_period)?;
    check_smoothing(smoothing_period)?;
    check_length("STOCHASTIC", "%K period", k_period, len)?;

    let raw_k: Vec<f64> = ((k_period - 1)..len)
        .map(|i| {
            let start = i + 1 - k_period;
            let highest = maximum(&high[start..=i]);
            let lowest = minimum(&low[start..=i]);
            (close[i] - lowest) / (highest - lowest) * 100.0
        })
        .collect();

    let k = if smoothing_period > 1 {
        check_fits("smoothing period", smoothing_period, raw_k.len())?;
        sma(&raw_k, smoothing_period)?
    } else {
        raw_k
    };

    check_fits("%D period", d_period, k.len())?;
    let d = sma(&k, d_period)?;

    Ok(StochasticResult { k, d })
}

/// Stochastic Oscillator
#[derive(Debug, Clone, PartialEq)]
pub struct Stochastic {
    /// %K lookback window
    pub k_period: usize,
    /// %D smoothing window
    pub d_period: usize,
    /// %K smoothing window (1 = fast stochastic)
    pub smoothing_period: usize,
}

impl Stochastic {
    /// Default %K period.
    pub const DEFAULT_K: usize = 14;
    /// Default %D period.
    pub const DEFAULT_D: usize = 3;
    /// Default %K smoothing.
    pub const DEFAULT_SMOOTHING: usize = 3;

    /// Creates a new stochastic oscillator.
    pub fn new(
        k_period: usize,
        d_period: usize,
        smoothing_period: usize,
    ) -> Result<Self, IndicatorError> {
        check_period("STOCHASTIC", "%K period", k_period)?;
        check_period("STOCHASTIC", "%D period", d_period)?;
        check_smoothing(smoothing_period)?;
        Ok(Self {
            k_period,
            d_period,
            smoothing_period,
        })
    }
}

impl Indicator for Stochastic {
    type Output = StochasticResult;

    fn name(&self) -> &'static str {
        "STOCHASTIC"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.hlc_len()
    }

    fn warmup_periods(&self) -> usize {
        self.k_period - 1 + self.smoothing_period - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<StochasticResult, IndicatorError> {
        stochastic(
            &series.high,
            &series.low,
            &series.close,
            self.k_period,
            self.d_period,
            self.smoothing_period,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let high = vec![10.0, 11.0, 12.0, 11.5, 12.5, 13.0, 12.0, 11.0, 10.5, 11.5];
        let low = vec![9.0, 10.0, 11.0, 10.5, 11.5, 12.0, 11.0, 10.0, 9.5, 10.5];
        let close = vec![9.5, 10.5, 11.5, 11.0, 12.0, 12.5, 11.5, 10.5, 10.0, 11.0];
        (high, low, close)
    }

    #[test]
    fn test_fast_stochastic() {
        let (high, low, close) = sample();
        let result = stochastic(&high, &low, &close, 5, 3, 1).unwrap();

        assert_eq!(result.k.len(), 10 - 5 + 1);
        assert_eq!(result.d.len(), result.k.len() - 3 + 1);

        // Window 0..=4: HH = 12.5, LL = 9.0, close = 12.0 -> 3/3.5 * 100
        assert_relative_eq!(result.k[0], 300.0 / 3.5, epsilon = 1e-10);
        // %D[0] = mean(%K[0..3])
        let expected_d = (result.k[0] + result.k[1] + result.k[2]) / 3.0;
        assert_relative_eq!(result.d[0], expected_d, epsilon = 1e-10);
    }

    #[test]
    fn test_slow_stochastic_smooths_k() {
        let (high, low, close) = sample();
        let fast = stochastic(&high, &low, &close, 5, 2, 1).unwrap();
        let slow = stochastic(&high, &low, &close, 5, 2, 3).unwrap();

        assert_eq!(slow.k.len(), fast.k.len() - 2);
        assert_relative_eq!(
            slow.k[0],
            (fast.k[0] + fast.k[1] + fast.k[2]) / 3.0,
            epsilon = 1e-10
        );
        assert_eq!(slow.d.len(), slow.k.len() - 1);
    }

    #[test]
    fn test_stochastic_bounds() {
        let (high, low, close) = sample();
        let result = stochastic(&high, &low, &close, 3, 3, 3).unwrap();

        for v in result.k.iter().chain(&result.d) {
            assert!((0.0..=100.0).contains(v), "out of range: {v}");
        }
    }

    #[test]
    fn test_stochastic_flat_window_is_nan() {
        let flat = [4.0; 8];
        let result = stochastic(&flat, &flat, &flat, 3, 2, 1).unwrap();
        assert!(result.k.iter().all(|v| v.is_nan()));
        assert!(result.d.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_stochastic_invalid() {
        let (high, low, close) = sample();
        assert!(stochastic(&high, &low, &close, 10, 3, 1).is_err());
        assert!(stochastic(&high, &low, &close, 5, 1, 1).is_err());
        assert!(stochastic(&high, &low, &close, 5, 3, 0).is_err());
        // %K has 2 values after smoothing; %D of 3 cannot fit
        assert!(stochastic(&high, &low, &close, 5, 3, 5).is_err());
        assert!(Stochastic::new(14, 3, 0).is_err());
    }

    #[test]
    fn test_stochastic_warmup() {
        assert_eq!(Stochastic::new(14, 3, 3).unwrap().warmup_periods(), 15);
        assert_eq!(Stochastic::new(14, 3, 1).unwrap().warmup_periods(), 13);
    }
}
