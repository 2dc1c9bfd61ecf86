//! Typed access to configured indicator parameters.
//!
//! Values arrive untyped from configuration. Each getter validates on read
//! and fails with [`IndicatorError::InvalidParameter`] naming the indicator.

use std::collections::BTreeMap;
use std::str::FromStr;

use chartcalc_types::ParamValue;

use crate::error::IndicatorError;

/// Named parameters of one indicator, read with typed getters.
#[derive(Debug, Clone, Copy)]
pub struct ParamSet<'a> {
    indicator: &'a str,
    values: &'a BTreeMap<String, ParamValue>,
}

impl<'a> ParamSet<'a> {
    /// Wraps a parameter map for the given indicator.
    #[must_use]
    pub fn new(indicator: &'a str, values: &'a BTreeMap<String, ParamValue>) -> Self {
        Self { indicator, values }
    }

    fn invalid(&self, reason: String) -> IndicatorError {
        IndicatorError::invalid_parameter(self.indicator, reason)
    }

    /// Reads a non-negative integer, falling back to `default` when absent.
    ///
    /// Numbers with a fractional part are rejected rather than rounded.
    pub fn period(&self, name: &str, default: usize) -> Result<usize, IndicatorError> {
        let value = match self.values.get(name) {
            None => return Ok(default),
            Some(ParamValue::Number(v)) => *v,
            Some(ParamValue::Text(text)) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| self.invalid(format!("{name} must be an integer, got '{text}'")))?,
        };

        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
            return Err(self.invalid(format!("{name} must be an integer, got {value}")));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(value as usize)
    }

    /// Reads a finite number, falling back to `default` when absent.
    pub fn number(&self, name: &str, default: f64) -> Result<f64, IndicatorError> {
        let value = match self.values.get(name) {
            None => return Ok(default),
            Some(ParamValue::Number(v)) => *v,
            Some(ParamValue::Text(text)) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| self.invalid(format!("{name} must be a number, got '{text}'")))?,
        };

        if !value.is_finite() {
            return Err(self.invalid(format!("{name} must be a finite number, got {value}")));
        }
        Ok(value)
    }

    /// Reads an enum-valued parameter, falling back to `default` when absent.
    pub fn choice<T>(&self, name: &str, default: T) -> Result<T, IndicatorError>
    where
        T: FromStr<Err = String>,
    {
        match self.values.get(name) {
            None => Ok(default),
            Some(ParamValue::Text(text)) => text
                .parse::<T>()
                .map_err(|reason| self.invalid(format!("{name}: {reason}"))),
            Some(ParamValue::Number(v)) => {
                Err(self.invalid(format!("{name} must be a name, got {v}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::envelopes::MovingAverageType;

    fn params(entries: &[(&str, ParamValue)]) -> BTreeMap<String, ParamValue> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_period_reads_integers() {
        let map = params(&[
            ("period", ParamValue::Number(14.0)),
            ("text", ParamValue::Text(" 9 ".into())),
        ]);
        let set = ParamSet::new("RSI", &map);

        assert_eq!(set.period("period", 5).unwrap(), 14);
        assert_eq!(set.period("text", 5).unwrap(), 9);
        assert_eq!(set.period("missing", 5).unwrap(), 5);
    }

    #[test]
    fn test_period_rejects_fractions_and_negatives() {
        let map = params(&[
            ("fraction", ParamValue::Number(14.5)),
            ("negative", ParamValue::Number(-3.0)),
            ("word", ParamValue::Text("fourteen".into())),
        ]);
        let set = ParamSet::new("RSI", &map);

        for name in ["fraction", "negative", "word"] {
            let err = set.period(name, 14).unwrap_err();
            let IndicatorError::InvalidParameter { indicator, reason } = err else {
                panic!("expected InvalidParameter");
            };
            assert_eq!(indicator, "RSI");
            assert!(reason.contains("must be an integer"), "{reason}");
        }
    }

    #[test]
    fn test_number() {
        let map = params(&[
            ("multiplier", ParamValue::Number(2.5)),
            ("bad", ParamValue::Text("NaN".into())),
        ]);
        let set = ParamSet::new("BOLLINGER", &map);

        assert!((set.number("multiplier", 2.0).unwrap() - 2.5).abs() < 1e-12);
        assert!((set.number("missing", 2.0).unwrap() - 2.0).abs() < 1e-12);
        assert!(set.number("bad", 2.0).is_err());
    }

    #[test]
    fn test_choice() {
        let map = params(&[
            ("type", ParamValue::Text("exponential".into())),
            ("numeric", ParamValue::Number(1.0)),
            ("unknown", ParamValue::Text("triangular".into())),
        ]);
        let set = ParamSet::new("ENVELOPES", &map);

        assert_eq!(
            set.choice("type", MovingAverageType::Simple).unwrap(),
            MovingAverageType::Exponential
        );
        assert_eq!(
            set.choice("missing", MovingAverageType::Simple).unwrap(),
            MovingAverageType::Simple
        );
        assert!(set.choice("numeric", MovingAverageType::Simple).is_err());
        assert!(set.choice("unknown", MovingAverageType::Simple).is_err());
    }
}
