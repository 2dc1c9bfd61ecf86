//! Commodity Channel Index (CCI) indicator

use chartcalc_types::{PriceSeries, usable_len};

use crate::error::{IndicatorError, check_finite, check_length, check_period};
use crate::statistics::{average, average_of, mean_deviation};
use crate::traits::Indicator;

/// Commodity Channel Index over raw high/low/close arrays.
///
/// `CCI = (TP - SMA(TP)) / (constant * MeanDeviation(TP))` where
/// `TP = (high + low + close) / 3`. A flat window has zero mean deviation and
/// yields `NaN` (or `±inf`) rather than an error.
pub fn cci(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    constant: f64,
) -> Result<Vec<f64>, IndicatorError> {
    let len = usable_len(&[high, low, close]);
    check_period("CCI", "period", period)?;
    check_constant(constant)?;
    check_length("CCI", "period", period, len)?;

    let typical: Vec<f64> = (0..len)
        .map(|i| average_of([high[i], low[i], close[i]]))
        .collect();

    Ok(typical
        .windows(period)
        .map(|window| {
            let sma = average(window);
            let deviation = mean_deviation(window, sma);
            (window[period - 1] - sma) / (constant * deviation)
        })
        .collect())
}

fn check_constant(constant: f64) -> Result<(), IndicatorError> {
    check_finite("CCI", "constant", constant)?;
    if constant <= 0.0 {
        return Err(IndicatorError::invalid_parameter(
            "CCI",
            format!("constant must be positive, got {constant}"),
        ));
    }
    Ok(())
}

/// Commodity Channel Index
#[derive(Debug, Clone, PartialEq)]
pub struct CCI {
    /// Window length
    pub period: usize,
    /// Scaling constant (Lambert's 0.015)
    pub constant: f64,
}

impl CCI {
    /// Default period.
    pub const DEFAULT_PERIOD: usize = 20;
    /// Default scaling constant.
    pub const DEFAULT_CONSTANT: f64 = 0.015;

    /// Creates a new CCI indicator.
    pub fn new(period: usize, constant: f64) -> Result<Self, IndicatorError> {
        check_period("CCI", "period", period)?;
        check_constant(constant)?;
        Ok(Self { period, constant })
    }
}

impl Indicator for CCI {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "CCI"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.hlc_len()
    }

    fn warmup_periods(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<Vec<f64>, IndicatorError> {
        cci(
            &series.high,
            &series.low,
            &series.close,
            self.period,
            self.constant,
        )
    }
}
