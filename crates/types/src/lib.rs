//! Chartcalc Types
//!
//! Caller-owned data for the chartcalc indicator engine: candles, price
//! series with their X values, and serde-backed indicator configuration.

pub mod candle;
pub mod config;
pub mod error;
pub mod series;

pub use candle::Candle;
pub use config::{IndicatorConfig, LineStyle, ParamValue, SeriesStyles};
pub use error::CoreError;
pub use series::{PriceSeries, timestamp_ns_to_ordinal, usable_len};
