pub mod build;
pub mod choices;

pub use build::{BuildError, build_sink, build_source, build_task};
pub use choices::{
    ConfigChoice, CsvFileParameters, LogSinkParameters, MonitorParameters,
    PulseGeneratorParameters, RunConfig, SinkChoice, SinkKind, SourceChoice, SourceKind,
    config_schema,
};
