//! Indicator registry for dynamic indicator creation.

use std::collections::{BTreeMap, HashMap};

use chartcalc_types::{IndicatorConfig, ParamValue};

use crate::compute::IndicatorKind;
use crate::error::IndicatorError;
use crate::impl_::{
    atr::ATR,
    bollinger::BollingerBands,
    cci::CCI,
    envelopes::{MovingAverageEnvelopes, MovingAverageType},
    macd::MACD,
    rsi::RSI,
    stochastic::Stochastic,
    williams_r::WilliamsR,
};
use crate::params::ParamSet;

/// Factory function type for creating indicators from parameters.
pub type IndicatorFactory =
    Box<dyn Fn(&ParamSet<'_>) -> Result<IndicatorKind, IndicatorError> + Send + Sync>;

/// Registry for indicator factories.
///
/// Allows dynamic creation of indicators by name and parameters.
pub struct IndicatorRegistry {
    /// Indicator factories by name.
    factories: HashMap<String, IndicatorFactory>,
}

impl IndicatorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers an indicator factory. Names are matched case-insensitively.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&ParamSet<'_>) -> Result<IndicatorKind, IndicatorError> + Send + Sync + 'static,
    {
        self.factories
            .insert(name.to_ascii_uppercase(), Box::new(factory));
    }

    /// Creates an indicator from a name and its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::UnknownIndicator`] if the name is not registered
    /// and [`IndicatorError::InvalidParameter`] when a parameter fails validation.
    pub fn create(
        &self,
        name: &str,
        params: &BTreeMap<String, ParamValue>,
    ) -> Result<IndicatorKind, IndicatorError> {
        let key = name.to_ascii_uppercase();
        let factory = self
            .factories
            .get(&key)
            .ok_or_else(|| IndicatorError::UnknownIndicator(name.to_string()))?;
        factory(&ParamSet::new(&key, params))
    }

    /// Creates an indicator from an instance configuration.
    pub fn create_from_config(
        &self,
        config: &IndicatorConfig,
    ) -> Result<IndicatorKind, IndicatorError> {
        self.create(&config.indicator, &config.params)
    }

    /// Checks if an indicator is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_ascii_uppercase())
    }

    /// Returns list of registered indicator names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Creates a registry with all built-in indicators pre-registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("ATR", |p| {
            Ok(IndicatorKind::Atr(ATR::new(
                p.period("period", ATR::DEFAULT_PERIOD)?,
            )?))
        });

        registry.register("CCI", |p| {
            Ok(IndicatorKind::Cci(CCI::new(
                p.period("period", CCI::DEFAULT_PERIOD)?,
                p.number("constant", CCI::DEFAULT_CONSTANT)?,
            )?))
        });

        registry.register("WILLIAMS_R", |p| {
            Ok(IndicatorKind::WilliamsR(WilliamsR::new(
                p.period("period", WilliamsR::DEFAULT_PERIOD)?,
            )?))
        });

        registry.register("RSI", |p| {
            Ok(IndicatorKind::Rsi(RSI::new(
                p.period("period", RSI::DEFAULT_PERIOD)?,
            )?))
        });

        registry.register("MACD", |p| {
            Ok(IndicatorKind::Macd(MACD::new(
                p.period("fast_period", MACD::DEFAULT_FAST)?,
                p.period("slow_period", MACD::DEFAULT_SLOW)?,
                p.period("smoothing_period", MACD::DEFAULT_SMOOTHING)?,
            )?))
        });

        registry.register("BOLLINGER", |p| {
            Ok(IndicatorKind::Bollinger(BollingerBands::new(
                p.period("period", BollingerBands::DEFAULT_PERIOD)?,
                p.number("multiplier", BollingerBands::DEFAULT_MULTIPLIER)?,
            )?))
        });

        registry.register("STOCHASTIC", |p| {
            Ok(IndicatorKind::Stochastic(Stochastic::new(
                p.period("k_period", Stochastic::DEFAULT_K)?,
                p.period("d_period", Stochastic::DEFAULT_D)?,
                p.period("smoothing_period", Stochastic::DEFAULT_SMOOTHING)?,
            )?))
        });

        registry.register("ENVELOPES", |p| {
            Ok(IndicatorKind::Envelopes(MovingAverageEnvelopes::new(
                p.period("period", MovingAverageEnvelopes::DEFAULT_PERIOD)?,
                p.choice("type", MovingAverageType::Simple)?,
                p.number("size", MovingAverageEnvelopes::DEFAULT_SIZE)?,
            )?))
        });

        registry
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
