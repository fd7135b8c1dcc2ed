use crate::core::{Millis, Sample};
use crate::detection::{Detection, SampleOutcome};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TracePoint {
    pub sample_index: u64,
    pub timestamp_ms: Millis,
    pub value: i32,
    pub outcome: SampleOutcome,
    /// `None` while the detector reports no signal.
    pub rate_per_minute: Option<u32>,
}

impl TracePoint {
    pub fn new(sample_index: u64, sample: &Sample, detection: &Detection) -> Self {
        Self {
            sample_index,
            timestamp_ms: sample.timestamp_ms,
            value: sample.value,
            outcome: detection.outcome,
            rate_per_minute: detection.rate.per_minute(),
        }
    }

    pub fn outcome_name(&self) -> &'static str {
        self.outcome.into()
    }
}

impl Display for TracePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "#{} t={}ms value={} {}",
            self.sample_index,
            self.timestamp_ms,
            self.value,
            self.outcome_name()
        )?;
        match self.rate_per_minute {
            Some(r) => write!(f, " rate={r}/min"),
            None => write!(f, " rate=none"),
        }
    }
}
