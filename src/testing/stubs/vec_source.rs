use crate::core::Sample;
use crate::streams::{SampleSource, SourceError};

/// Scripted source; `None` entries are acquisition failures.
pub struct VecSource {
    ticks: Vec<Option<Sample>>,
    idx: usize,
}

impl VecSource {
    pub fn new(ticks: Vec<Option<Sample>>) -> Self {
        Self { ticks, idx: 0 }
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self::new(samples.into_iter().map(Some).collect())
    }
}

impl SampleSource for VecSource {
    fn has_more_samples(&self) -> bool {
        self.idx < self.ticks.len()
    }

    fn next_sample(&mut self) -> Option<Result<Sample, SourceError>> {
        let tick = *self.ticks.get(self.idx)?;
        self.idx += 1;
        Some(tick.ok_or_else(|| {
            SourceError::Acquisition(format!("scripted failure #{}", self.idx))
        }))
    }

    fn restart(&mut self) -> Result<(), SourceError> {
        self.idx = 0;
        Ok(())
    }
}
