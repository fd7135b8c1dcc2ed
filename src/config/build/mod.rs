mod error;
mod monitor;
mod sinks;
mod sources;
mod task;

pub use error::BuildError;

pub use sinks::build_sink;
pub use sources::build_source;
pub use task::build_task;
