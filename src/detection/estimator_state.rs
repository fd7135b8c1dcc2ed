use crate::core::{Millis, RateEstimate};
use strum_macros::{Display, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DetectorPhase {
    /// No event accepted since construction or the last reset.
    Idle,
    /// At least one event accepted; the refractory gate is measured from it.
    Armed,
}

/// Caller-owned detector state.
///
/// A plain value: one per signal, mutated only by
/// [`PeakRateEstimator`](crate::detection::PeakRateEstimator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstimatorState {
    pub(crate) last_event_ms: Option<Millis>,
    pub(crate) last_rate: RateEstimate,
}

impl EstimatorState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> DetectorPhase {
        match self.last_event_ms {
            None => DetectorPhase::Idle,
            Some(_) => DetectorPhase::Armed,
        }
    }

    #[inline]
    pub fn last_event_ms(&self) -> Option<Millis> {
        self.last_event_ms
    }

    #[inline]
    pub fn last_rate(&self) -> RateEstimate {
        self.last_rate
    }

    /// Back to `Idle` with the `NoSignal` estimate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
