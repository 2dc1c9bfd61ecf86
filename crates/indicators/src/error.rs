//! Indicator error types.

use thiserror::Error;

/// Errors that can occur during indicator construction, computation or
/// registry lookups.
///
/// Too little data (0 or 1 samples) and degenerate arithmetic (division by
/// zero, NaN) are not errors: the cache returns "no data" for the former and
/// the non-finite values flow into the output for the latter.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// A period, constant or multiplier failed its constraint
    #[error("{indicator}: invalid parameter: {reason}")]
    InvalidParameter {
        /// Indicator that rejected the parameter.
        indicator: String,
        /// The violated constraint.
        reason: String,
    },

    /// Unknown indicator name requested from registry
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    /// Configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] chartcalc_types::CoreError),
}

impl IndicatorError {
    /// Creates an `InvalidParameter` error.
    #[must_use]
    pub fn invalid_parameter(indicator: impl Into<String>, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidParameter {
            indicator: indicator.into(),
            reason: reason.into(),
        }
    }
}

/// Fails unless `period > 1`.
pub(crate) fn check_period(indicator: &str, name: &str, period: usize) -> Result<(), IndicatorError> {
    if period <= 1 {
        return Err(IndicatorError::invalid_parameter(
            indicator,
            format!("{name} must be greater than 1, got {period}"),
        ));
    }
    Ok(())
}

/// Fails unless the usable input is longer than `period`.
pub(crate) fn check_length(
    indicator: &str,
    name: &str,
    period: usize,
    len: usize,
) -> Result<(), IndicatorError> {
    if len <= period {
        return Err(IndicatorError::invalid_parameter(
            indicator,
            format!("{name} ({period}) must be smaller than the data length ({len})"),
        ));
    }
    Ok(())
}

/// Fails unless `value` is finite.
pub(crate) fn check_finite(indicator: &str, name: &str, value: f64) -> Result<(), IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::invalid_parameter(
            indicator,
            format!("{name} must be a finite number, got {value}"),
        ));
    }
    Ok(())
}
