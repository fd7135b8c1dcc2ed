use crate::core::{ConfigError, Millis, RateEstimate, Sample};
use crate::detection::{
    Detection, DetectorPhase, EstimatorState, PeakRateEstimator, RateDetector, SampleOutcome,
    SmoothingWindow,
};

/// Owns one signal's detector state together with its optional pre-filter
/// and no-signal timeout.
///
/// - smoothing: samples pass through a [`SmoothingWindow`] before the
///   threshold comparison;
/// - no-signal timeout: once armed, a sample that is not an accepted event
///   arriving more than `timeout` after the last one drops back to idle and
///   reports `NoSignal`.
#[derive(Debug, Clone)]
pub struct RateMonitor {
    estimator: PeakRateEstimator,
    state: EstimatorState,
    smoothing: Option<SmoothingWindow>,
    no_signal_timeout_ms: Option<Millis>,
}

impl RateMonitor {
    pub fn new(estimator: PeakRateEstimator) -> Self {
        Self {
            estimator,
            state: EstimatorState::new(),
            smoothing: None,
            no_signal_timeout_ms: None,
        }
    }

    /// Windows of size one are dropped; they would pass samples through.
    pub fn with_smoothing(mut self, window: SmoothingWindow) -> Self {
        self.smoothing = (window.size() > 1).then_some(window);
        self
    }

    pub fn with_no_signal_timeout(mut self, timeout_ms: Millis) -> Result<Self, ConfigError> {
        if timeout_ms <= self.estimator.refractory_ms() {
            return Err(ConfigError::TimeoutWithinRefractory {
                timeout_ms,
                refractory_ms: self.estimator.refractory_ms(),
            });
        }
        self.no_signal_timeout_ms = Some(timeout_ms);
        Ok(self)
    }

    pub fn estimator(&self) -> &PeakRateEstimator {
        &self.estimator
    }

    pub fn state(&self) -> &EstimatorState {
        &self.state
    }

    pub fn smoothing_window(&self) -> usize {
        self.smoothing.as_ref().map_or(1, SmoothingWindow::size)
    }

    pub fn no_signal_timeout_ms(&self) -> Option<Millis> {
        self.no_signal_timeout_ms
    }

    fn signal_lost(&self, detection: &Detection, now: Millis) -> Option<Millis> {
        let timeout = self.no_signal_timeout_ms?;
        if detection.outcome.is_event() {
            return None;
        }
        let last = self.state.last_event_ms()?;
        let since_last = now.checked_sub(last)?;
        (since_last > timeout).then_some(since_last)
    }

    fn log(&self, sample: &Sample, filtered: i32, detection: &Detection) {
        if detection.clock_reset {
            log::warn!(
                "timestamp {}ms went backwards; detector reset to idle",
                sample.timestamp_ms
            );
        }
        match detection.outcome {
            SampleOutcome::BelowThreshold => {
                log::trace!("no peak: {filtered} at {}ms", sample.timestamp_ms)
            }
            SampleOutcome::FirstEvent => {
                log::info!("first peak at {}ms; waiting for the next one", sample.timestamp_ms)
            }
            SampleOutcome::Accepted { interval_ms } => {
                log::info!("peak detected after {interval_ms}ms: {}", detection.rate)
            }
            SampleOutcome::Suppressed { since_last_ms } => {
                log::debug!("peak {since_last_ms}ms after the last one; too close, ignored")
            }
            SampleOutcome::SignalLost { since_last_ms } => {
                log::info!("no peak for {since_last_ms}ms; assuming no signal")
            }
        }
    }
}

impl RateDetector for RateMonitor {
    fn observe(&mut self, sample: &Sample) -> Detection {
        let filtered = match self.smoothing.as_mut() {
            Some(window) => window.push(sample.value),
            None => sample.value,
        };

        let mut detection = self
            .estimator
            .observe(&mut self.state, filtered, sample.timestamp_ms);

        if let Some(since_last_ms) = self.signal_lost(&detection, sample.timestamp_ms) {
            self.state.reset();
            detection.outcome = SampleOutcome::SignalLost { since_last_ms };
            detection.rate = RateEstimate::NoSignal;
        }

        self.log(sample, filtered, &detection);
        detection
    }

    fn current_rate(&self) -> RateEstimate {
        self.state.last_rate()
    }

    fn phase(&self) -> DetectorPhase {
        self.state.phase()
    }

    fn reset(&mut self) {
        self.state.reset();
        if let Some(window) = self.smoothing.as_mut() {
            window.reset();
        }
    }
}
