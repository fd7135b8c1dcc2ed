mod estimators;
mod measurement;
mod preview;
mod rate_summary;

pub use estimators::{Estimator, MeanEstimator};
pub use measurement::Measurement;
pub use preview::{RateTrace, TraceFormat, TracePoint};
pub use rate_summary::RateSummary;
