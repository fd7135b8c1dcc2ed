mod channel_sink;
mod log_sink;
mod rate_sink;

pub use channel_sink::{ChannelSink, RateUpdate};
pub use log_sink::LogSink;
pub use rate_sink::{RateSink, SinkError};
