//! Single entry point for collaborators.

use chartcalc_types::{IndicatorConfig, PriceSeries};

use crate::error::IndicatorError;
use crate::impl_::{
    atr::ATR, bollinger::BollingerBands, cci::CCI, envelopes::MovingAverageEnvelopes, macd::MACD,
    rsi::RSI, stochastic::Stochastic, williams_r::WilliamsR,
};
use crate::registry::IndicatorRegistry;
use crate::traits::{Indicator, IndicatorOutput};

/// A validated, parameterized indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorKind {
    /// Average True Range
    Atr(ATR),
    /// Commodity Channel Index
    Cci(CCI),
    /// Williams %R
    WilliamsR(WilliamsR),
    /// Relative Strength Index
    Rsi(RSI),
    /// MACD
    Macd(MACD),
    /// Bollinger Bands
    Bollinger(BollingerBands),
    /// Stochastic Oscillator
    Stochastic(Stochastic),
    /// Moving Average Envelopes
    Envelopes(MovingAverageEnvelopes),
}

impl IndicatorKind {
    /// Builds an indicator from configuration through the default registry.
    pub fn from_config(config: &IndicatorConfig) -> Result<Self, IndicatorError> {
        IndicatorRegistry::with_defaults().create_from_config(config)
    }

    /// Registry name of the indicator.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Atr(i) => i.name(),
            IndicatorKind::Cci(i) => i.name(),
            IndicatorKind::WilliamsR(i) => i.name(),
            IndicatorKind::Rsi(i) => i.name(),
            IndicatorKind::Macd(i) => i.name(),
            IndicatorKind::Bollinger(i) => i.name(),
            IndicatorKind::Stochastic(i) => i.name(),
            IndicatorKind::Envelopes(i) => i.name(),
        }
    }

    /// Samples the calculation will read from `series`.
    #[must_use]
    pub fn usable_len(&self, series: &PriceSeries) -> usize {
        match self {
            IndicatorKind::Atr(i) => i.usable_len(series),
            IndicatorKind::Cci(i) => i.usable_len(series),
            IndicatorKind::WilliamsR(i) => i.usable_len(series),
            IndicatorKind::Rsi(i) => i.usable_len(series),
            IndicatorKind::Macd(i) => i.usable_len(series),
            IndicatorKind::Bollinger(i) => i.usable_len(series),
            IndicatorKind::Stochastic(i) => i.usable_len(series),
            IndicatorKind::Envelopes(i) => i.usable_len(series),
        }
    }

    /// Leading samples consumed before the primary output starts.
    #[must_use]
    pub fn warmup_periods(&self) -> usize {
        match self {
            IndicatorKind::Atr(i) => i.warmup_periods(),
            IndicatorKind::Cci(i) => i.warmup_periods(),
            IndicatorKind::WilliamsR(i) => i.warmup_periods(),
            IndicatorKind::Rsi(i) => i.warmup_periods(),
            IndicatorKind::Macd(i) => i.warmup_periods(),
            IndicatorKind::Bollinger(i) => i.warmup_periods(),
            IndicatorKind::Stochastic(i) => i.warmup_periods(),
            IndicatorKind::Envelopes(i) => i.warmup_periods(),
        }
    }

    /// Computes the aligned output.
    pub fn compute(&self, series: &PriceSeries) -> Result<IndicatorOutput, IndicatorError> {
        match self {
            IndicatorKind::Atr(i) => i.compute(series),
            IndicatorKind::Cci(i) => i.compute(series),
            IndicatorKind::WilliamsR(i) => i.compute(series),
            IndicatorKind::Rsi(i) => i.compute(series),
            IndicatorKind::Macd(i) => i.compute(series),
            IndicatorKind::Bollinger(i) => i.compute(series),
            IndicatorKind::Stochastic(i) => i.compute(series),
            IndicatorKind::Envelopes(i) => i.compute(series),
        }
    }
}

/// Computes `kind` over `series` and aligns every output against its X values.
///
/// # Errors
/// Returns [`IndicatorError::InvalidParameter`] when the data is not longer
/// than the indicator's period.
pub fn compute(kind: &IndicatorKind, series: &PriceSeries) -> Result<IndicatorOutput, IndicatorError> {
    kind.compute(series)
}
