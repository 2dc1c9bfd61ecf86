//! Chartcalc Indicators
//!
//! Technical indicator engine for price charts.
//! Computes indicator series over caller-owned price data and aligns each
//! result to the trailing X values it belongs to.
//!
//! # Features
//! - Indicator trait with vectorized computation and suffix alignment
//! - Multi-output indicators (bands, MACD, stochastic)
//! - Per-instance cache with lazy recomputation
//! - Registry for building indicators from configuration
//!
//! # Available Indicators
//! - SMA / EMA: moving average kernels
//! - ATR: Average True Range (Wilder smoothing)
//! - CCI: Commodity Channel Index
//! - Williams %R
//! - RSI: Relative Strength Index (Wilder smoothing)
//! - MACD: line, signal and histogram
//! - Bollinger Bands: Upper, Middle, Lower bands
//! - Stochastic Oscillator: %K and %D
//! - Moving Average Envelopes

pub mod cache;
pub mod compute;
pub mod error;
pub mod impl_;
pub mod params;
pub mod registry;
pub mod statistics;
pub mod traits;

// Re-export main types
pub use cache::{CacheState, IndicatorCache};
pub use compute::{IndicatorKind, compute};
pub use error::IndicatorError;
pub use params::ParamSet;
pub use registry::IndicatorRegistry;
pub use traits::{AlignedSeries, DataRect, Indicator, IndicatorOutput, IntoOutput};

// Re-export indicator implementations
pub use impl_::{
    atr::{ATR, atr},
    bollinger::{BollingerBands, BollingerResult, bollinger_bands},
    cci::{CCI, cci},
    ema::ema,
    envelopes::{EnvelopeResult, MovingAverageEnvelopes, MovingAverageType, envelopes},
    macd::{MACD, MacdResult, macd},
    rsi::{RSI, rsi},
    sma::sma,
    stochastic::{Stochastic, StochasticResult, stochastic},
    williams_r::{WilliamsR, williams_r},
};
