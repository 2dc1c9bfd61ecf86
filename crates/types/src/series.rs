//! Caller-owned price series.
//!
//! A [`PriceSeries`] holds parallel high/low/close/volume arrays plus an
//! optional X-series. The indicator engine only ever reads from it.

use std::borrow::Cow;

use crate::candle::Candle;
use crate::error::CoreError;

const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;

/// Converts a Unix epoch timestamp in nanoseconds into a fractional day ordinal.
#[must_use]
pub fn timestamp_ns_to_ordinal(timestamp_ns: i64) -> f64 {
    timestamp_ns as f64 / NANOS_PER_DAY
}

/// Returns the minimum length across a set of parallel arrays.
///
/// Indicators with several required inputs compute over this many samples.
#[must_use]
pub fn usable_len(arrays: &[&[f64]]) -> usize {
    arrays.iter().map(|a| a.len()).min().unwrap_or(0)
}

/// Ordered price samples with an optional X-series.
///
/// When no X-series is supplied the sample position is used as X.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "PriceSeriesRaw")]
pub struct PriceSeries {
    /// High prices
    pub high: Vec<f64>,
    /// Low prices
    pub low: Vec<f64>,
    /// Close prices
    pub close: Vec<f64>,
    /// Volumes
    pub volume: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<Vec<f64>>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct PriceSeriesRaw {
    #[serde(default)]
    high: Vec<f64>,
    #[serde(default)]
    low: Vec<f64>,
    close: Vec<f64>,
    #[serde(default)]
    volume: Vec<f64>,
    #[serde(default)]
    x: Option<Vec<f64>>,
}

impl TryFrom<PriceSeriesRaw> for PriceSeries {
    type Error = CoreError;

    fn try_from(raw: PriceSeriesRaw) -> Result<Self, Self::Error> {
        let series = Self {
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume: raw.volume,
            x: None,
        };
        match raw.x {
            Some(x) => series.with_x(x),
            None => Ok(series),
        }
    }
}

impl PriceSeries {
    /// Creates a close-only series. High and low mirror the close.
    #[must_use]
    pub fn from_close(close: Vec<f64>) -> Self {
        Self {
            high: close.clone(),
            low: close.clone(),
            close,
            volume: Vec::new(),
            x: None,
        }
    }

    /// Creates a series from high/low/close arrays.
    ///
    /// The arrays may differ in length; calculators use the shortest.
    #[must_use]
    pub fn from_hlc(high: Vec<f64>, low: Vec<f64>, close: Vec<f64>) -> Self {
        Self {
            high,
            low,
            close,
            volume: Vec::new(),
            x: None,
        }
    }

    /// Creates a series from candles, using each open time as the X value.
    #[must_use]
    pub fn from_candles(candles: &[Candle]) -> Self {
        Self {
            high: candles.iter().map(|c| c.high).collect(),
            low: candles.iter().map(|c| c.low).collect(),
            close: candles.iter().map(|c| c.close).collect(),
            volume: candles.iter().map(|c| c.volume).collect(),
            x: Some(candles.iter().map(Candle::x_ordinal).collect()),
        }
    }

    /// Attaches an explicit X-series.
    ///
    /// # Errors
    /// Returns [`CoreError::LengthMismatch`] when `x` and `close` differ in length.
    pub fn with_x(mut self, x: Vec<f64>) -> Result<Self, CoreError> {
        if x.len() != self.close.len() {
            return Err(CoreError::LengthMismatch {
                expected: self.close.len(),
                actual: x.len(),
            });
        }
        self.x = Some(x);
        Ok(self)
    }

    /// Attaches an X-series derived from epoch-nanosecond timestamps.
    ///
    /// # Errors
    /// Returns [`CoreError::LengthMismatch`] when the lengths differ.
    pub fn with_timestamps_ns(self, timestamps_ns: &[i64]) -> Result<Self, CoreError> {
        let x = timestamps_ns
            .iter()
            .copied()
            .map(timestamp_ns_to_ordinal)
            .collect();
        self.with_x(x)
    }

    /// Number of close samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true when there are no close samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Returns true when an explicit X-series is attached.
    #[must_use]
    pub fn has_x(&self) -> bool {
        self.x.is_some()
    }

    /// Checks that an attached X-series still matches the close length.
    ///
    /// The price arrays are public, so a caller can grow them after
    /// [`with_x`](Self::with_x) without extending X.
    ///
    /// # Errors
    /// Returns [`CoreError::LengthMismatch`] when the lengths have drifted apart.
    pub fn check_x(&self) -> Result<(), CoreError> {
        match &self.x {
            Some(x) if x.len() != self.close.len() => Err(CoreError::LengthMismatch {
                expected: self.close.len(),
                actual: x.len(),
            }),
            _ => Ok(()),
        }
    }

    /// X values: the supplied X-series or the index range `0..len`.
    #[must_use]
    pub fn x_values(&self) -> Cow<'_, [f64]> {
        match &self.x {
            Some(x) => Cow::Borrowed(x.as_slice()),
            None => Cow::Owned((0..self.close.len()).map(|i| i as f64).collect()),
        }
    }

    /// Usable length when high, low and close are all required.
    #[must_use]
    pub fn hlc_len(&self) -> usize {
        usable_len(&[&self.high, &self.low, &self.close])
    }
}
