use crate::core::{Millis, RateEstimate};
use crate::sinks::{RateSink, SinkError};
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateUpdate {
    pub timestamp_ms: Millis,
    pub rate: RateEstimate,
}

/// Hands estimates to another thread through an `mpsc` channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<RateUpdate>,
}

impl ChannelSink {
    pub fn new(tx: Sender<RateUpdate>) -> Self {
        Self { tx }
    }
}

impl RateSink for ChannelSink {
    fn publish(&mut self, timestamp_ms: Millis, rate: RateEstimate) -> Result<(), SinkError> {
        self.tx
            .send(RateUpdate { timestamp_ms, rate })
            .map_err(|_| SinkError::Disconnected)
    }
}
