use crate::core::{Millis, RateEstimate, Sample};
use crate::detection::{RateDetector, SampleOutcome};
use crate::evaluation::{RateTrace, TracePoint};
use crate::sinks::RateSink;
use crate::streams::{SampleSource, SourceError};
use crate::tasks::{NotifyPolicy, RunReport};
use std::io::{Error, ErrorKind};

/// Caller-driven sampling loop: source → detector → sinks.
///
/// Ticks whose acquisition failed are logged and skipped without touching
/// the detector. An I/O failure of the source ends the run with an error.
/// Tracing is off unless a `trace_frequency` is given.
pub struct MonitorTask {
    detector: Box<dyn RateDetector>,
    source: Box<dyn SampleSource>,
    sinks: Vec<Box<dyn RateSink>>,
    notify: NotifyPolicy,

    max_samples: Option<u64>,
    trace_frequency: Option<u64>,

    trace: RateTrace,
    report: RunReport,
    last_published: Option<RateEstimate>,
}

impl MonitorTask {
    pub fn new(
        detector: Box<dyn RateDetector>,
        source: Box<dyn SampleSource>,
        notify: NotifyPolicy,
        max_samples: Option<u64>,
        trace_frequency: Option<u64>,
    ) -> Result<Self, Error> {
        if trace_frequency == Some(0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "trace_frequency must be > 0",
            ));
        }

        Ok(Self {
            detector,
            source,
            sinks: Vec::new(),
            notify,
            max_samples,
            trace_frequency,
            trace: RateTrace::default(),
            report: RunReport::default(),
            last_published: None,
        })
    }

    pub fn with_sink(mut self, sink: Box<dyn RateSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn run(&mut self) -> Result<&RunReport, SourceError> {
        while self.source.has_more_samples() {
            if let Some(n) = self.max_samples {
                if self.report.ticks() >= n {
                    break;
                }
            }
            let Some(tick) = self.source.next_sample() else {
                break;
            };

            match tick {
                Ok(sample) => self.step(sample),
                Err(e) if e.is_skippable() => {
                    self.report.samples_skipped += 1;
                    log::error!("skipping tick: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        self.report.final_rate = self.detector.current_rate();
        log::info!("run finished: {}", self.report);
        Ok(&self.report)
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn trace(&self) -> &RateTrace {
        &self.trace
    }

    fn step(&mut self, sample: Sample) {
        let detection = self.detector.observe(&sample);
        self.report.samples_seen += 1;

        if detection.clock_reset {
            self.report.clock_resets += 1;
        }
        match detection.outcome {
            SampleOutcome::FirstEvent => self.report.events += 1,
            SampleOutcome::Accepted { .. } => {
                self.report.events += 1;
                self.report.summary.add(detection.rate);
            }
            SampleOutcome::Suppressed { .. } => self.report.suppressed += 1,
            SampleOutcome::SignalLost { .. } => self.report.signal_losses += 1,
            SampleOutcome::BelowThreshold => {}
        }

        let notable = detection.clock_reset
            || !matches!(
                detection.outcome,
                SampleOutcome::BelowThreshold | SampleOutcome::Suppressed { .. }
            );
        if let Some(every) = self.trace_frequency {
            if notable || self.report.samples_seen % every == 0 {
                self.trace
                    .push(TracePoint::new(self.report.samples_seen, &sample, &detection));
            }
        }

        if self.notify.should_publish(&detection, self.last_published) {
            self.publish(sample.timestamp_ms, detection.rate);
        }
    }

    fn publish(&mut self, timestamp_ms: Millis, rate: RateEstimate) {
        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.publish(timestamp_ms, rate) {
                log::warn!("failed to publish {rate} at {timestamp_ms}ms: {e}");
            }
        }
        self.last_published = Some(rate);
    }
}
