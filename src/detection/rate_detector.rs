use crate::core::{Millis, RateEstimate, Sample};
use crate::detection::{Detection, DetectorPhase};

/// A stateful sample-to-rate detector driven by a caller-owned loop.
pub trait RateDetector {
    /// Classifies one sample and returns the resulting estimate.
    fn observe(&mut self, sample: &Sample) -> Detection;

    /// The estimate as of the last observed sample.
    fn current_rate(&self) -> RateEstimate;

    fn phase(&self) -> DetectorPhase;

    /// Returns to the idle, no-signal state.
    fn reset(&mut self);

    fn process_sample(&mut self, value: i32, now: Millis) -> RateEstimate {
        self.observe(&Sample::new(value, now)).rate
    }
}
