mod error;
mod rate;
mod sample;

pub use error::ConfigError;
pub use rate::{MS_PER_MINUTE, RateEstimate};
pub use sample::{Millis, Sample};
