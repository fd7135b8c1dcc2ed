use crate::core::{Millis, RateEstimate};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use strum_macros::IntoStaticStr;

/// How a single sample was classified by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SampleOutcome {
    BelowThreshold,
    /// Accepted while idle: arms the detector, no interval yet.
    FirstEvent,
    Accepted { interval_ms: Millis },
    /// Above threshold but inside the refractory window.
    Suppressed { since_last_ms: Millis },
    /// No accepted event within the no-signal timeout; detector re-armed.
    SignalLost { since_last_ms: Millis },
}

impl SampleOutcome {
    #[inline]
    pub fn is_event(self) -> bool {
        matches!(self, Self::FirstEvent | Self::Accepted { .. })
    }
}

/// Result of observing one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub outcome: SampleOutcome,
    pub rate: RateEstimate,
    /// The timestamp ran backwards and the state was reset before
    /// classification.
    pub clock_reset: bool,
}

impl Display for Detection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let kind: &'static str = self.outcome.into();
        write!(f, "{kind} rate={}", self.rate)?;
        if self.clock_reset {
            write!(f, " (clock reset)")?;
        }
        Ok(())
    }
}
