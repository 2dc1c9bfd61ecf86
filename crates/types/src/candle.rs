use crate::series::timestamp_ns_to_ordinal;

/// One OHLCV bar as delivered by the data layer.
/// `timestamp_ns` is the bar's open time.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Candle {
    /// Unix epoch nanoseconds UTC (open time)
    pub timestamp_ns: i64,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    /// Open time as a fractional day ordinal, usable as an X value.
    #[must_use]
    pub fn x_ordinal(&self) -> f64 {
        timestamp_ns_to_ordinal(self.timestamp_ns)
    }
}
