//! Indicator implementations
//!
//! Moving-average kernels and the concrete calculators. Every calculator is
//! available both as a free function over raw arrays and as a parameterized
//! struct implementing [`Indicator`](crate::traits::Indicator).

pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod envelopes;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod williams_r;
