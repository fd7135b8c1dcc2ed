use crate::config::build::BuildError;
use crate::config::choices::MonitorParameters;
use crate::detection::{PeakRateEstimator, RateMonitor, SmoothingWindow};

impl TryFrom<MonitorParameters> for RateMonitor {
    type Error = BuildError;

    fn try_from(parameters: MonitorParameters) -> Result<Self, Self::Error> {
        let estimator = PeakRateEstimator::new(parameters.threshold, parameters.refractory_ms)?;
        let window = SmoothingWindow::new(parameters.smoothing_window)?;

        let monitor = RateMonitor::new(estimator).with_smoothing(window);
        match parameters.no_signal_timeout_ms {
            Some(timeout) => Ok(monitor.with_no_signal_timeout(timeout)?),
            None => Ok(monitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;

    #[test]
    fn defaults_build_plain_monitor() {
        let m = RateMonitor::try_from(MonitorParameters::default()).unwrap();
        assert_eq!(m.estimator().threshold(), 2000);
        assert_eq!(m.estimator().refractory_ms(), 600);
        assert_eq!(m.smoothing_window(), 1);
        assert_eq!(m.no_signal_timeout_ms(), None);
    }

    #[test]
    fn all_options() {
        let m = RateMonitor::try_from(MonitorParameters {
            threshold: 2500,
            refractory_ms: 800,
            smoothing_window: 5,
            no_signal_timeout_ms: Some(5_000),
        })
        .unwrap();
        assert_eq!(m.smoothing_window(), 5);
        assert_eq!(m.no_signal_timeout_ms(), Some(5_000));
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let zero_refractory = MonitorParameters {
            refractory_ms: 0,
            ..MonitorParameters::default()
        };
        let empty_window = MonitorParameters {
            smoothing_window: 0,
            ..MonitorParameters::default()
        };
        let short_timeout = MonitorParameters {
            no_signal_timeout_ms: Some(100),
            ..MonitorParameters::default()
        };

        for (p, want) in [
            (zero_refractory, ConfigError::ZeroRefractoryPeriod),
            (empty_window, ConfigError::EmptySmoothingWindow),
            (
                short_timeout,
                ConfigError::TimeoutWithinRefractory {
                    timeout_ms: 100,
                    refractory_ms: 600,
                },
            ),
        ] {
            match RateMonitor::try_from(p) {
                Err(BuildError::Config(got)) => assert_eq!(got, want),
                other => panic!("unexpected: {other:?}"),
            }
        }
    }
}
