use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Milliseconds on a monotonic 32-bit uptime clock.
///
/// The counter wraps after roughly 49.7 days; the detector treats a
/// timestamp that moves backwards as a wraparound and re-arms.
pub type Millis = u32;

/// A single scalar reading and the uptime at which it was taken.
///
/// `value` is whatever unit the source produces (raw ADC code, millivolts);
/// the detector threshold must be expressed in the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub value: i32,
    pub timestamp_ms: Millis,
}

impl Sample {
    #[inline]
    pub fn new(value: i32, timestamp_ms: Millis) -> Self {
        Self {
            value,
            timestamp_ms,
        }
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}@{}ms", self.value, self.timestamp_ms)
    }
}
