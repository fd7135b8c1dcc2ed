use crate::config::build::{BuildError, build_sink, build_source};
use crate::config::choices::RunConfig;
use crate::detection::RateMonitor;
use crate::tasks::MonitorTask;

/// Assembles source, detector and sinks from a run configuration.
pub fn build_task(config: RunConfig) -> Result<MonitorTask, BuildError> {
    let monitor = RateMonitor::try_from(config.monitor)?;
    let source = build_source(config.source)?;

    let mut task = MonitorTask::new(
        Box::new(monitor),
        source,
        config.notify,
        config.max_samples,
        config.trace_frequency,
    )?;
    for sink in config.sinks {
        task = task.with_sink(build_sink(sink)?);
    }

    log::debug!("built monitor task");
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_runs_generator_config() {
        let config = RunConfig::from_json_str(
            r#"{
                "monitor": {"threshold": 2000, "refractory_ms": 600},
                "source": {"type": "pulse-generator",
                           "params": {"rate_per_minute": 75, "max_samples": 1500}},
                "notify": "on-change"
            }"#,
        )
        .unwrap();
        let mut task = build_task(config).unwrap();
        let report = task.run().unwrap();
        assert_eq!(report.samples_seen, 1_500);
        assert_eq!(report.final_rate.per_minute(), Some(75));
        assert!(task.trace().is_empty());
    }

    #[test]
    fn zero_trace_frequency_is_rejected() {
        let config = RunConfig::from_json_str(
            r#"{"source": {"type": "pulse-generator", "params": {}}, "trace_frequency": 0}"#,
        )
        .unwrap();
        assert!(matches!(build_task(config), Err(BuildError::Io(_))));
    }
}
