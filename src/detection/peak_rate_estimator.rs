use crate::core::{ConfigError, Millis, RateEstimate};
use crate::detection::{Detection, EstimatorState, SampleOutcome};

/// Level-triggered threshold detector with a refractory gate.
///
/// Every sample above `threshold` is a candidate event. A candidate is
/// accepted when the detector is idle or when at least `refractory_ms` have
/// elapsed since the previous accepted event; otherwise it is treated as
/// part of the same excursion and suppressed. The rate is `60000 / interval`
/// between consecutive accepted events.
///
/// The estimator only holds configuration. State lives in a caller-owned
/// [`EstimatorState`], so one estimator can drive any number of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakRateEstimator {
    threshold: i32,
    refractory_ms: Millis,
}

impl PeakRateEstimator {
    pub fn new(threshold: i32, refractory_ms: Millis) -> Result<Self, ConfigError> {
        if refractory_ms == 0 {
            return Err(ConfigError::ZeroRefractoryPeriod);
        }
        Ok(Self {
            threshold,
            refractory_ms,
        })
    }

    #[inline]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    #[inline]
    pub fn refractory_ms(&self) -> Millis {
        self.refractory_ms
    }

    /// Feeds one sample and returns the current estimate.
    #[inline]
    pub fn process_sample(
        &self,
        state: &mut EstimatorState,
        sample: i32,
        now: Millis,
    ) -> RateEstimate {
        self.observe(state, sample, now).rate
    }

    /// Feeds one sample and reports how it was classified.
    ///
    /// `now` must not decrease between calls. If it does (uptime counter
    /// wraparound), the state is reset to idle before the sample is
    /// classified.
    pub fn observe(&self, state: &mut EstimatorState, sample: i32, now: Millis) -> Detection {
        let clock_reset = matches!(state.last_event_ms, Some(last) if now < last);
        if clock_reset {
            state.reset();
        }

        let outcome = if sample <= self.threshold {
            SampleOutcome::BelowThreshold
        } else {
            match state.last_event_ms {
                None => {
                    state.last_event_ms = Some(now);
                    state.last_rate = RateEstimate::NoSignal;
                    SampleOutcome::FirstEvent
                }
                Some(last) => {
                    let elapsed = now - last;
                    if elapsed >= self.refractory_ms {
                        state.last_rate = RateEstimate::from_interval(elapsed);
                        state.last_event_ms = Some(now);
                        SampleOutcome::Accepted {
                            interval_ms: elapsed,
                        }
                    } else {
                        SampleOutcome::Suppressed {
                            since_last_ms: elapsed,
                        }
                    }
                }
            }
        };

        Detection {
            outcome,
            rate: state.last_rate,
            clock_reset,
        }
    }
}
