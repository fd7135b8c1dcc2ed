use crate::config::build::BuildError;
use crate::config::choices::{
    ConfigChoice, MonitorParameters, SinkChoice, SourceChoice, SourceKind,
};
use crate::tasks::NotifyPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_sinks() -> Vec<SinkChoice> {
    vec![SinkChoice::default()]
}

/// Everything needed to assemble one sampling run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RunConfig {
    #[serde(default)]
    #[schemars(title = "Monitor", description = "Detector parameters")]
    pub monitor: MonitorParameters,

    #[schemars(title = "Source", description = "Where samples come from")]
    pub source: SourceChoice,

    #[serde(default = "default_sinks")]
    #[schemars(title = "Sinks", description = "Consumers of the rate estimates")]
    pub sinks: Vec<SinkChoice>,

    #[serde(default)]
    #[schemars(title = "Notify", description = "When sinks receive the current estimate")]
    pub notify: NotifyPolicy,

    #[serde(default)]
    #[schemars(
        title = "Max Samples",
        description = "Stop after this many ticks (None = until the source ends)"
    )]
    pub max_samples: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Trace Frequency",
        description = "Record every Nth sample in the trace, plus every event; empty = no trace",
        range(min = 1)
    )]
    pub trace_frequency: Option<u64>,
}

impl RunConfig {
    pub fn from_json_str(s: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// A complete configuration with default parameters for `kind`.
    pub fn template(kind: SourceKind) -> Result<Self, BuildError> {
        Ok(Self {
            monitor: MonitorParameters::default(),
            source: SourceChoice::with_defaults(kind)?,
            sinks: default_sinks(),
            notify: NotifyPolicy::default(),
            max_samples: None,
            trace_frequency: None,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn minimal_config_fills_defaults() {
        let c = RunConfig::from_json_str(r#"{"source": {"type": "pulse-generator", "params": {}}}"#)
            .unwrap();
        assert_eq!(c.monitor, MonitorParameters::default());
        assert_eq!(c.sinks.len(), 1);
        assert_eq!(c.notify, NotifyPolicy::EverySample);
        assert_eq!(c.max_samples, None);
        assert_eq!(c.trace_frequency, None);
    }

    #[test]
    fn missing_source_is_rejected() {
        let err = RunConfig::from_json_str("{}").unwrap_err();
        assert!(matches!(err, BuildError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(
            tf,
            r#"{{
                "monitor": {{"threshold": 2400, "smoothing_window": 5}},
                "source": {{"type": "csv-file", "params": {{"path": "beats.csv"}}}},
                "sinks": [{{"type": "log", "params": {{"no_signal_code": 99}}}}],
                "notify": "on-change",
                "max_samples": 1000,
                "trace_frequency": 50
            }}"#
        )
        .unwrap();
        tf.flush().unwrap();

        let c = RunConfig::load(tf.path()).unwrap();
        assert_eq!(c.monitor.threshold, 2400);
        assert_eq!(c.monitor.refractory_ms, 600);
        assert_eq!(c.monitor.smoothing_window, 5);
        assert!(matches!(c.source, SourceChoice::CsvFile(ref p) if p.path.ends_with("beats.csv")));
        assert_eq!(c.notify, NotifyPolicy::OnChange);
        assert_eq!(c.max_samples, Some(1000));
        assert_eq!(c.trace_frequency, Some(50));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BuildError::Io(_)));
    }

    #[test]
    fn template_round_trips() {
        let t = RunConfig::template(SourceKind::PulseGenerator).unwrap();
        let json = t.to_json_pretty().unwrap();
        let back = RunConfig::from_json_str(&json).unwrap();
        assert_eq!(back.monitor, t.monitor);
        assert_eq!(back.trace_frequency, None);
        assert!(matches!(back.source, SourceChoice::PulseGenerator(_)));
    }
}
