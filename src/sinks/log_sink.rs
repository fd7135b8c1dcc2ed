use crate::core::{Millis, RateEstimate};
use crate::sinks::{RateSink, SinkError};

/// Writes every published estimate to the log at `info` level.
///
/// Estimates are flattened to a number, with `no_signal_code` standing in
/// for `NoSignal`, the way a scalar notification characteristic carries it.
#[derive(Debug, Clone)]
pub struct LogSink {
    label: String,
    no_signal_code: u32,
}

impl LogSink {
    pub fn new<L: Into<String>>(label: L, no_signal_code: u32) -> Self {
        Self {
            label: label.into(),
            no_signal_code,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn no_signal_code(&self) -> u32 {
        self.no_signal_code
    }
}

impl RateSink for LogSink {
    fn publish(&mut self, timestamp_ms: Millis, rate: RateEstimate) -> Result<(), SinkError> {
        log::info!(
            "{}: {} at {timestamp_ms}ms",
            self.label,
            rate.to_code(self.no_signal_code)
        );
        Ok(())
    }
}
