use crate::config::build::BuildError;
use crate::config::choices::SinkChoice;
use crate::sinks::{LogSink, RateSink};

pub fn build_sink(choice: SinkChoice) -> Result<Box<dyn RateSink>, BuildError> {
    match choice {
        SinkChoice::Log(p) => {
            if p.label.trim().is_empty() {
                return Err(BuildError::InvalidParameter("log sink label is empty".into()));
            }
            Ok(Box::new(LogSink::new(p.label, p.no_signal_code)))
        }
    }
}
