//! Bollinger Bands indicator

use chartcalc_types::PriceSeries;

use crate::error::{IndicatorError, check_finite, check_length, check_period};
use crate::statistics::{average, standard_deviation};
use crate::traits::{AlignedSeries, Indicator, IndicatorOutput, IntoOutput};

/// Bollinger Bands result containing upper, middle, and lower bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerResult {
    /// Upper band = SMA + multiplier * std
    pub upper: Vec<f64>,
    /// Middle band = SMA
    pub middle: Vec<f64>,
    /// Lower band = SMA - multiplier * std
    pub lower: Vec<f64>,
}

impl IntoOutput for BollingerResult {
    fn into_output(self, x: &[f64], usable_len: usize) -> IndicatorOutput {
        IndicatorOutput::Bands {
            upper: AlignedSeries::align(x, usable_len, self.upper),
            middle: AlignedSeries::align(x, usable_len, self.middle),
            lower: AlignedSeries::align(x, usable_len, self.lower),
        }
    }
}

/// Calculates Bollinger Bands over raw close prices.
///
/// Uses population standard deviation (n, not n-1) over the same rolling
/// window as the SMA. All three bands have `len - period + 1` values.
pub fn bollinger_bands(
    close: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerResult, IndicatorError> {
    check_period("BOLLINGER", "period", period)?;
    check_finite("BOLLINGER", "multiplier", multiplier)?;
    check_length("BOLLINGER", "period", period, close.len())?;

    let count = close.len() - period + 1;
    let mut upper = Vec::with_capacity(count);
    let mut middle = Vec::with_capacity(count);
    let mut lower = Vec::with_capacity(count);

    for window in close.windows(period) {
        let sma = average(window);
        let std = standard_deviation(window);

        middle.push(sma);
        upper.push(sma + multiplier * std);
        lower.push(sma - multiplier * std);
    }

    Ok(BollingerResult {
        upper,
        middle,
        lower,
    })
}

/// Bollinger Bands
///
/// - Upper Band = SMA + (multiplier * `StdDev`)
/// - Middle Band = SMA
/// - Lower Band = SMA - (multiplier * `StdDev`)
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub multiplier: f64,
}

impl BollingerBands {
    /// Default period.
    pub const DEFAULT_PERIOD: usize = 20;
    /// Default multiplier.
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Creates new Bollinger Bands with the given parameters.
    pub fn new(period: usize, multiplier: f64) -> Result<Self, IndicatorError> {
        check_period("BOLLINGER", "period", period)?;
        check_finite("BOLLINGER", "multiplier", multiplier)?;
        Ok(Self { period, multiplier })
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerResult;

    fn name(&self) -> &'static str {
        "BOLLINGER"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.close.len()
    }

    fn warmup_periods(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<BollingerResult, IndicatorError> {
        bollinger_bands(&series.close, self.period, self.multiplier)
    }
}
