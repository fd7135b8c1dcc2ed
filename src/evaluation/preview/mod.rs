mod rate_trace;
mod trace_point;

pub use rate_trace::{RateTrace, TraceFormat};
pub use trace_point::TracePoint;
