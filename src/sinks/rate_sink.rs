use crate::core::{Millis, RateEstimate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink receiver disconnected")]
    Disconnected,

    #[error("sink rejected update: {0}")]
    Rejected(String),
}

/// Downstream consumer of rate estimates (display, radio notification, ...).
///
/// The sink decides how and whether to transmit; the sampling loop only
/// logs a failed publish and carries on.
pub trait RateSink {
    fn publish(&mut self, timestamp_ms: Millis, rate: RateEstimate) -> Result<(), SinkError>;
}
