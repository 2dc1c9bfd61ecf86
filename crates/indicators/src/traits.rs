//! Indicator traits and output types.
//!
//! Every calculator returns arrays shorter than its input: the leading
//! samples consumed by the window are dropped. [`AlignedSeries`] pairs those
//! values with the matching trailing suffix of the input X-series.

use chartcalc_types::PriceSeries;

use crate::error::IndicatorError;

/// Output values paired with their X positions.
///
/// `x.len() == y.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct AlignedSeries {
    /// X positions (input index or date ordinal)
    pub x: Vec<f64>,
    /// Indicator values; may contain `NaN`/`inf` from degenerate windows
    pub y: Vec<f64>,
}

impl AlignedSeries {
    /// Aligns `y` against the suffix of `x` ending at `usable_len`.
    ///
    /// Output `i` maps to `x[usable_len - y.len() + i]`.
    #[must_use]
    pub fn align(x: &[f64], usable_len: usize, y: Vec<f64>) -> Self {
        let end = usable_len.min(x.len());
        let start = end.saturating_sub(y.len());
        let x = x[start..end].to_vec();
        debug_assert_eq!(x.len(), y.len(), "output longer than usable input");
        Self { x, y }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Returns true when there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterates over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Iterates over the pairs whose value is finite (plottable).
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Bounding rectangle of the plottable output points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DataRect {
    /// Smallest X
    pub x_min: f64,
    /// Largest X
    pub x_max: f64,
    /// Smallest Y
    pub y_min: f64,
    /// Largest Y
    pub y_max: f64,
}

impl DataRect {
    fn include(rect: Option<Self>, (x, y): (f64, f64)) -> Option<Self> {
        Some(match rect {
            None => Self {
                x_min: x,
                x_max: x,
                y_min: y,
                y_max: y,
            },
            Some(r) => Self {
                x_min: r.x_min.min(x),
                x_max: r.x_max.max(x),
                y_min: r.y_min.min(y),
                y_max: r.y_max.max(y),
            },
        })
    }
}

/// Aligned output of one indicator, one field per named sub-series.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum IndicatorOutput {
    /// Single line (ATR, CCI, Williams %R, RSI)
    Line(AlignedSeries),
    /// Three bands (Bollinger Bands, moving average envelopes)
    Bands {
        /// Upper band
        upper: AlignedSeries,
        /// Middle band (the moving average)
        middle: AlignedSeries,
        /// Lower band
        lower: AlignedSeries,
    },
    /// MACD line, signal line and histogram
    Macd {
        /// MACD line
        macd: AlignedSeries,
        /// Signal line
        signal: AlignedSeries,
        /// Histogram (MACD - signal)
        histogram: AlignedSeries,
    },
    /// Stochastic %K and %D
    Stochastic {
        /// %K line
        k: AlignedSeries,
        /// %D line
        d: AlignedSeries,
    },
}

impl IndicatorOutput {
    /// The main line: the single line, the middle band, the MACD line or %K.
    #[must_use]
    pub fn primary(&self) -> &AlignedSeries {
        match self {
            IndicatorOutput::Line(line) => line,
            IndicatorOutput::Bands { middle, .. } => middle,
            IndicatorOutput::Macd { macd, .. } => macd,
            IndicatorOutput::Stochastic { k, .. } => k,
        }
    }

    /// All sub-series with their names.
    #[must_use]
    pub fn series(&self) -> Vec<(&'static str, &AlignedSeries)> {
        match self {
            IndicatorOutput::Line(line) => vec![("line", line)],
            IndicatorOutput::Bands {
                upper,
                middle,
                lower,
            } => vec![("upper", upper), ("middle", middle), ("lower", lower)],
            IndicatorOutput::Macd {
                macd,
                signal,
                histogram,
            } => vec![("macd", macd), ("signal", signal), ("histogram", histogram)],
            IndicatorOutput::Stochastic { k, d } => vec![("k", k), ("d", d)],
        }
    }

    /// Bounding rectangle over every finite point of every sub-series.
    ///
    /// Returns `None` when nothing is plottable.
    #[must_use]
    pub fn data_rect(&self) -> Option<DataRect> {
        self.series()
            .into_iter()
            .flat_map(|(_, s)| s.finite_points())
            .fold(None, DataRect::include)
    }
}

/// Conversion of a calculator's raw arrays into an aligned output.
pub trait IntoOutput {
    /// Aligns every array against the input X values.
    fn into_output(self, x: &[f64], usable_len: usize) -> IndicatorOutput;
}

impl IntoOutput for Vec<f64> {
    fn into_output(self, x: &[f64], usable_len: usize) -> IndicatorOutput {
        IndicatorOutput::Line(AlignedSeries::align(x, usable_len, self))
    }
}

/// A parameterized indicator calculation.
///
/// Implementors validate their parameters at construction and their data
/// length in [`calculate`](Indicator::calculate).
pub trait Indicator: Send + Sync {
    /// Raw (unaligned) result
    type Output: IntoOutput;

    /// Name of the indicator (e.g., "RSI", "MACD").
    fn name(&self) -> &'static str;

    /// Number of samples the calculation will use: the shortest of the
    /// required input arrays.
    fn usable_len(&self, series: &PriceSeries) -> usize;

    /// Number of leading samples consumed before the primary output starts.
    fn warmup_periods(&self) -> usize;

    /// Runs the calculation over the raw arrays.
    fn calculate(&self, series: &PriceSeries) -> Result<Self::Output, IndicatorError>;

    /// Runs the calculation and aligns the result against the X values.
    ///
    /// Fails with [`IndicatorError::Config`] when an attached X-series no
    /// longer matches the close length.
    fn compute(&self, series: &PriceSeries) -> Result<IndicatorOutput, IndicatorError> {
        series.check_x()?;
        let usable_len = self.usable_len(series);
        if usable_len < series.len() {
            tracing::debug!(
                "{}: inputs truncated to {} of {} samples",
                self.name(),
                usable_len,
                series.len()
            );
        }
        let output = self.calculate(series)?;
        Ok(output.into_output(&series.x_values(), usable_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_takes_suffix() {
        let x = [10.0, 11.0, 12.0, 13.0, 14.0];
        let aligned = AlignedSeries::align(&x, 5, vec![1.0, 2.0]);
        assert_eq!(aligned.x, vec![13.0, 14.0]);
        assert_eq!(aligned.len(), 2);
    }

    #[test]
    fn test_align_respects_usable_len() {
        let x = [10.0, 11.0, 12.0, 13.0, 14.0];
        let aligned = AlignedSeries::align(&x, 4, vec![1.0, 2.0]);
        assert_eq!(aligned.x, vec![12.0, 13.0]);
    }

    #[test]
    fn test_finite_points_skip_degenerate_values() {
        let series = AlignedSeries {
            x: vec![0.0, 1.0, 2.0, 3.0],
            y: vec![1.0, f64::NAN, f64::INFINITY, -2.0],
        };
        let points: Vec<_> = series.finite_points().collect();
        assert_eq!(points, vec![(0.0, 1.0), (3.0, -2.0)]);
    }

    #[test]
    fn test_data_rect_spans_all_series() {
        let output = IndicatorOutput::Stochastic {
            k: AlignedSeries {
                x: vec![2.0, 3.0, 4.0],
                y: vec![20.0, f64::NAN, 80.0],
            },
            d: AlignedSeries {
                x: vec![4.0],
                y: vec![95.0],
            },
        };
        let rect = output.data_rect().unwrap();
        assert_eq!(rect.x_min, 2.0);
        assert_eq!(rect.x_max, 4.0);
        assert_eq!(rect.y_min, 20.0);
        assert_eq!(rect.y_max, 95.0);
    }

    #[test]
    fn test_data_rect_none_when_nothing_plottable() {
        let output = IndicatorOutput::Line(AlignedSeries {
            x: vec![0.0, 1.0],
            y: vec![f64::NAN, f64::NAN],
        });
        assert!(output.data_rect().is_none());
    }

    #[test]
    fn test_primary_and_series_names() {
        let line = AlignedSeries {
            x: vec![0.0],
            y: vec![1.0],
        };
        let output = IndicatorOutput::Bands {
            upper: line.clone(),
            middle: line.clone(),
            lower: line.clone(),
        };
        assert_eq!(output.primary(), &line);
        let names: Vec<_> = output.series().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["upper", "middle", "lower"]);
    }
}
