use thiserror::Error;

/// Errors raised while building caller-owned series and configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// X-series length does not match the Y-series it indexes
    #[error("length mismatch: expected {expected} x values, got {actual}")]
    LengthMismatch {
        /// Length of the Y-series.
        expected: usize,
        /// Length of the supplied X-series.
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::Config("missing indicator name".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing indicator name");

        let err = CoreError::LengthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "length mismatch: expected 3 x values, got 2");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
