//! Per-instance result cache.
//!
//! An [`IndicatorCache`] owns one indicator's parameters and its last
//! aligned output. Reads recompute lazily when the cache is stale; changing
//! parameters or notifying an input change clears the stored output so a
//! stale result is never handed out.

use std::hash::{DefaultHasher, Hash, Hasher};

use chartcalc_types::PriceSeries;

use crate::compute::IndicatorKind;
use crate::error::IndicatorError;
use crate::traits::{AlignedSeries, DataRect, IndicatorOutput};

/// Minimum usable samples before any calculation is attempted.
const MIN_SAMPLES: usize = 2;

/// Lifecycle of a cached result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing computed yet
    Uninitialized,
    /// Output matches the current parameters and input
    Fresh,
    /// Parameters or input changed since the last computation
    Stale,
}

/// Identity of the input last computed over: length plus a hash of the bits
/// of every array the calculators read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InputFingerprint {
    len: usize,
    hash: u64,
}

impl InputFingerprint {
    fn of(series: &PriceSeries) -> Self {
        let mut hasher = DefaultHasher::new();
        for array in [&series.high, &series.low, &series.close] {
            array.len().hash(&mut hasher);
            for value in array {
                value.to_bits().hash(&mut hasher);
            }
        }
        for value in series.x_values().iter() {
            value.to_bits().hash(&mut hasher);
        }
        Self {
            len: series.len(),
            hash: hasher.finish(),
        }
    }
}

/// Memoized output of one indicator instance.
///
/// Reads take `&mut self`, so a recomputation always finishes before the
/// next read on the same instance.
#[derive(Debug, Clone)]
pub struct IndicatorCache {
    kind: IndicatorKind,
    state: CacheState,
    output: Option<IndicatorOutput>,
    fingerprint: Option<InputFingerprint>,
}

impl IndicatorCache {
    /// Creates an uninitialized cache for the given indicator.
    #[must_use]
    pub fn new(kind: IndicatorKind) -> Self {
        Self {
            kind,
            state: CacheState::Uninitialized,
            output: None,
            fingerprint: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// Current parameters.
    #[must_use]
    pub fn kind(&self) -> &IndicatorKind {
        &self.kind
    }

    /// Replaces the parameters.
    ///
    /// Returns `true` and clears the cached output when they differ from the
    /// current ones; identical parameters leave the cache untouched.
    pub fn set_kind(&mut self, kind: IndicatorKind) -> bool {
        if kind == self.kind {
            return false;
        }
        tracing::trace!("{}: parameters changed", self.kind.name());
        self.kind = kind;
        self.invalidate();
        true
    }

    /// Input replaced or mutated: clears the cached output.
    pub fn invalidate(&mut self) {
        self.output = None;
        self.fingerprint = None;
        if self.state == CacheState::Fresh {
            tracing::trace!("{}: cache marked stale", self.kind.name());
            self.state = CacheState::Stale;
        }
    }

    /// Returns true when the next read would recompute for `series`.
    #[must_use]
    pub fn is_stale(&self, series: &PriceSeries) -> bool {
        self.state != CacheState::Fresh || self.fingerprint != Some(InputFingerprint::of(series))
    }

    /// Peeks at the cached output without recomputing.
    #[must_use]
    pub fn cached(&self) -> Option<&IndicatorOutput> {
        self.output.as_ref()
    }

    /// Returns the full aligned output, recomputing when stale.
    ///
    /// `Ok(None)` means "no data": the input has fewer than two usable
    /// samples and the calculator was not invoked.
    ///
    /// # Errors
    /// Propagates calculator errors such as
    /// [`IndicatorError::InvalidParameter`];
    /// the cache is left empty.
    pub fn calculated_values(
        &mut self,
        series: &PriceSeries,
    ) -> Result<Option<&IndicatorOutput>, IndicatorError> {
        if self.kind.usable_len(series) < MIN_SAMPLES {
            self.invalidate();
            return Ok(None);
        }

        let fingerprint = InputFingerprint::of(series);
        if self.state != CacheState::Fresh || self.fingerprint != Some(fingerprint) {
            self.invalidate();
            tracing::debug!(
                "{}: recomputing over {} samples",
                self.kind.name(),
                fingerprint.len
            );
            let output = self.kind.compute(series)?;
            self.output = Some(output);
            self.fingerprint = Some(fingerprint);
            self.state = CacheState::Fresh;
        }

        Ok(self.output.as_ref())
    }

    /// Returns the primary aligned x/y pair, recomputing when stale.
    pub fn values(
        &mut self,
        series: &PriceSeries,
    ) -> Result<Option<&AlignedSeries>, IndicatorError> {
        Ok(self
            .calculated_values(series)?
            .map(IndicatorOutput::primary))
    }

    /// Returns the bounding rectangle of the plottable output, recomputing
    /// when stale.
    pub fn data_rect(&mut self, series: &PriceSeries) -> Result<Option<DataRect>, IndicatorError> {
        Ok(self
            .calculated_values(series)?
            .and_then(IndicatorOutput::data_rect))
    }
}
