use crate::core::Millis;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::num::NonZeroU32;

pub const MS_PER_MINUTE: u32 = 60_000;

/// Output of the detector: a strictly positive events-per-minute rate, or
/// the `NoSignal` sentinel when no valid interval has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateEstimate {
    #[default]
    NoSignal,
    PerMinute(NonZeroU32),
}

impl RateEstimate {
    /// Rate implied by two events `interval_ms` apart.
    ///
    /// Integer division rounds toward zero. A zero interval, or one longer
    /// than a minute (which would round to zero), yields `NoSignal`.
    #[inline]
    pub fn from_interval(interval_ms: Millis) -> Self {
        if interval_ms == 0 {
            return Self::NoSignal;
        }
        NonZeroU32::new(MS_PER_MINUTE / interval_ms).map_or(Self::NoSignal, Self::PerMinute)
    }

    #[inline]
    pub fn per_minute(self) -> Option<u32> {
        match self {
            Self::NoSignal => None,
            Self::PerMinute(n) => Some(n.get()),
        }
    }

    #[inline]
    pub fn is_signal(self) -> bool {
        matches!(self, Self::PerMinute(_))
    }

    /// Flattens the estimate for sinks that can only carry a number.
    #[inline]
    pub fn to_code(self, no_signal_code: u32) -> u32 {
        self.per_minute().unwrap_or(no_signal_code)
    }
}

impl Display for RateEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NoSignal => write!(f, "no-signal"),
            Self::PerMinute(n) => write!(f, "{n}/min"),
        }
    }
}
