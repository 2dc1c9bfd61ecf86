//! Indicator instance configuration.

use std::collections::BTreeMap;

use crate::error::CoreError;

/// A raw parameter value as written in configuration.
///
/// Numbers carry periods, multipliers and constants; text carries enum
/// choices such as the envelope type. Typed validation happens in the
/// indicator crate when the value is read.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Numeric value
    Number(f64),
    /// Textual value
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Optional style override for one drawn sub-series.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineStyle {
    /// Stroke color (e.g. `#1f77b4`)
    #[serde(default)]
    pub color: Option<String>,
    /// Stroke thickness in device-independent pixels
    #[serde(default)]
    pub thickness: Option<f64>,
    /// Dash pattern
    #[serde(default)]
    pub dash: Option<Vec<f64>>,
}

/// Style overrides, one field per named sub-series of the indicator shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SeriesStyles {
    /// Single-line indicators (ATR, CCI, Williams %R, RSI)
    Line {
        /// The indicator line
        #[serde(default)]
        line: Option<LineStyle>,
    },
    /// Three-band indicators (Bollinger Bands, envelopes)
    Bands {
        /// Upper band
        #[serde(default)]
        upper: Option<LineStyle>,
        /// Middle band
        #[serde(default)]
        middle: Option<LineStyle>,
        /// Lower band
        #[serde(default)]
        lower: Option<LineStyle>,
    },
    /// MACD
    Macd {
        /// MACD line
        #[serde(default)]
        macd_line: Option<LineStyle>,
        /// Signal line
        #[serde(default)]
        signal_line: Option<LineStyle>,
        /// Histogram bars
        #[serde(default)]
        histogram: Option<LineStyle>,
    },
    /// Stochastic oscillator
    Stochastic {
        /// %K line
        #[serde(default)]
        k_line: Option<LineStyle>,
        /// %D line
        #[serde(default)]
        d_line: Option<LineStyle>,
    },
}

impl Default for SeriesStyles {
    fn default() -> Self {
        SeriesStyles::Line { line: None }
    }
}

/// Configuration of one indicator instance.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IndicatorConfig {
    /// Indicator name, normalized to upper case (e.g. `RSI`, `WILLIAMS_R`)
    pub indicator: String,
    /// Named parameters
    pub params: BTreeMap<String, ParamValue>,
    /// Per-sub-series style overrides
    pub styles: SeriesStyles,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct IndicatorConfigRaw {
    pub indicator: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
    #[serde(default)]
    pub styles: SeriesStyles,
}

impl TryFrom<IndicatorConfigRaw> for IndicatorConfig {
    type Error = CoreError;

    fn try_from(raw: IndicatorConfigRaw) -> Result<Self, Self::Error> {
        let indicator = raw.indicator.trim().to_ascii_uppercase();
        if indicator.is_empty() {
            return Err(CoreError::Config("indicator name must not be empty".into()));
        }
        Ok(Self {
            indicator,
            params: raw.params,
            styles: raw.styles,
        })
    }
}

impl<'de> serde::Deserialize<'de> for IndicatorConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = IndicatorConfigRaw::deserialize(deserializer)?;
        IndicatorConfig::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl IndicatorConfig {
    /// Creates a configuration with no parameters and default styles.
    #[must_use]
    pub fn new(indicator: impl Into<String>) -> Self {
        Self {
            indicator: indicator.into().trim().to_ascii_uppercase(),
            params: BTreeMap::new(),
            styles: SeriesStyles::default(),
        }
    }

    /// Adds or replaces a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replaces the style overrides.
    #[must_use]
    pub fn with_styles(mut self, styles: SeriesStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns [`CoreError::Json`] on malformed input or an empty indicator name.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
