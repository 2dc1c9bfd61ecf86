//! Moving Average Envelopes indicator

use std::fmt;
use std::str::FromStr;

use chartcalc_types::PriceSeries;

use crate::error::{IndicatorError, check_finite, check_length, check_period};
use crate::impl_::ema::ema;
use crate::impl_::sma::sma;
use crate::traits::{AlignedSeries, Indicator, IndicatorOutput, IntoOutput};

/// Moving average used as the envelope base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovingAverageType {
    /// Simple moving average
    #[default]
    Simple,
    /// Exponential moving average (SMA-seeded)
    Exponential,
}

impl FromStr for MovingAverageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "sma" => Ok(MovingAverageType::Simple),
            "exponential" | "ema" => Ok(MovingAverageType::Exponential),
            other => Err(format!(
                "unknown moving average type '{other}' (expected simple or exponential)"
            )),
        }
    }
}

impl fmt::Display for MovingAverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovingAverageType::Simple => f.write_str("simple"),
            MovingAverageType::Exponential => f.write_str("exponential"),
        }
    }
}

/// Envelope result containing the upper band, base average and lower band.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeResult {
    /// base * (1 + size)
    pub upper: Vec<f64>,
    /// SMA or EMA of close
    pub base: Vec<f64>,
    /// base * (1 - size)
    pub lower: Vec<f64>,
}

impl IntoOutput for EnvelopeResult {
    fn into_output(self, x: &[f64], usable_len: usize) -> IndicatorOutput {
        IndicatorOutput::Bands {
            upper: AlignedSeries::align(x, usable_len, self.upper),
            middle: AlignedSeries::align(x, usable_len, self.base),
            lower: AlignedSeries::align(x, usable_len, self.lower),
        }
    }
}

fn check_size(size: f64) -> Result<(), IndicatorError> {
    check_finite("ENVELOPES", "size", size)?;
    if size < 0.0 {
        return Err(IndicatorError::invalid_parameter(
            "ENVELOPES",
            format!("size must not be negative, got {size}"),
        ));
    }
    Ok(())
}

/// Calculates moving average envelopes over raw close prices.
///
/// `size` is a fraction: 0.025 places the bands 2.5% above and below the base.
pub fn envelopes(
    close: &[f64],
    period: usize,
    ma_type: MovingAverageType,
    size: f64,
) -> Result<EnvelopeResult, IndicatorError> {
    check_period("ENVELOPES", "period", period)?;
    check_size(size)?;
    check_length("ENVELOPES", "period", period, close.len())?;

    let base = match ma_type {
        MovingAverageType::Simple => sma(close, period)?,
        MovingAverageType::Exponential => ema(close, period)?,
    };
    let upper = base.iter().map(|b| b * (1.0 + size)).collect();
    let lower = base.iter().map(|b| b * (1.0 - size)).collect();

    Ok(EnvelopeResult { upper, base, lower })
}

/// Moving Average Envelopes
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverageEnvelopes {
    /// Moving average period
    pub period: usize,
    /// Base moving average type
    pub ma_type: MovingAverageType,
    /// Band distance as a fraction of the base
    pub size: f64,
}

impl MovingAverageEnvelopes {
    /// Default period.
    pub const DEFAULT_PERIOD: usize = 20;
    /// Default band size.
    pub const DEFAULT_SIZE: f64 = 0.025;

    /// Creates new envelopes.
    pub fn new(
        period: usize,
        ma_type: MovingAverageType,
        size: f64,
    ) -> Result<Self, IndicatorError> {
        check_period("ENVELOPES", "period", period)?;
        check_size(size)?;
        Ok(Self {
            period,
            ma_type,
            size,
        })
    }
}

impl Indicator for MovingAverageEnvelopes {
    type Output = EnvelopeResult;

    fn name(&self) -> &'static str {
        "ENVELOPES"
    }

    fn usable_len(&self, series: &PriceSeries) -> usize {
        series.close.len()
    }

    fn warmup_periods(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, series: &PriceSeries) -> Result<EnvelopeResult, IndicatorError> {
        envelopes(&series.close, self.period, self.ma_type, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_envelopes() {
        let result = envelopes(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, MovingAverageType::Simple, 0.1)
            .unwrap();

        assert_eq!(result.base.len(), 3);
        assert_relative_eq!(result.base[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.upper[0], 2.2, epsilon = 1e-12);
        assert_relative_eq!(result.lower[0], 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_envelopes_use_ema() {
        let close = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = envelopes(&close, 3, MovingAverageType::Exponential, 0.0).unwrap();
        let expected = ema(&close, 3).unwrap();

        assert_eq!(result.base, expected);
        assert_eq!(result.upper, expected);
        assert_eq!(result.lower, expected);
    }

    #[test]
    fn test_ma_type_parsing() {
        assert_eq!(
            "Simple".parse::<MovingAverageType>(),
            Ok(MovingAverageType::Simple)
        );
        assert_eq!(
            "ema".parse::<MovingAverageType>(),
            Ok(MovingAverageType::Exponential)
        );
        assert!("weighted".parse::<MovingAverageType>().is_err());
        assert_eq!(MovingAverageType::Exponential.to_string(), "exponential");
    }

    #[test]
    fn test_envelopes_invalid() {
        let close = [1.0, 2.0, 3.0];
        assert!(envelopes(&close, 3, MovingAverageType::Simple, 0.1).is_err());
        assert!(envelopes(&close, 2, MovingAverageType::Simple, -0.1).is_err());
        assert!(MovingAverageEnvelopes::new(20, MovingAverageType::Simple, f64::NAN).is_err());
    }
}
