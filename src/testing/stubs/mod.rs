pub mod recording_sink;
pub mod vec_source;

pub use recording_sink::{FailingSink, RecordingSink};
pub use vec_source::VecSource;
