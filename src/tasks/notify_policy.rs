use crate::core::RateEstimate;
use crate::detection::{Detection, SampleOutcome};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// When the sampling loop hands the current estimate to its sinks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NotifyPolicy {
    /// After every processed sample.
    #[default]
    EverySample,
    /// On accepted events and on signal loss.
    OnEvent,
    /// Whenever the estimate differs from the last one published.
    OnChange,
}

impl NotifyPolicy {
    pub fn should_publish(
        self,
        detection: &Detection,
        last_published: Option<RateEstimate>,
    ) -> bool {
        match self {
            NotifyPolicy::EverySample => true,
            NotifyPolicy::OnEvent => {
                detection.outcome.is_event()
                    || matches!(detection.outcome, SampleOutcome::SignalLost { .. })
            }
            NotifyPolicy::OnChange => last_published != Some(detection.rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn detection(outcome: SampleOutcome, rate: RateEstimate) -> Detection {
        Detection {
            outcome,
            rate,
            clock_reset: false,
        }
    }

    #[test]
    fn on_event_ignores_plain_samples() {
        let r = RateEstimate::from_interval(800);
        let p = NotifyPolicy::OnEvent;
        assert!(!p.should_publish(&detection(SampleOutcome::BelowThreshold, r), None));
        assert!(!p.should_publish(
            &detection(SampleOutcome::Suppressed { since_last_ms: 5 }, r),
            None
        ));
        assert!(p.should_publish(&detection(SampleOutcome::FirstEvent, r), None));
        assert!(p.should_publish(
            &detection(SampleOutcome::SignalLost { since_last_ms: 6_000 }, r),
            None
        ));
    }

    #[test]
    fn on_change_compares_with_last_publication() {
        let r = RateEstimate::from_interval(800);
        let d = detection(SampleOutcome::BelowThreshold, r);
        assert!(NotifyPolicy::OnChange.should_publish(&d, None));
        assert!(!NotifyPolicy::OnChange.should_publish(&d, Some(r)));
        assert!(NotifyPolicy::OnChange.should_publish(&d, Some(RateEstimate::NoSignal)));
        assert!(NotifyPolicy::EverySample.should_publish(&d, Some(r)));
    }

    #[test]
    fn parses_kebab_names() {
        assert_eq!(NotifyPolicy::from_str("on-change").unwrap(), NotifyPolicy::OnChange);
        assert_eq!(NotifyPolicy::default().to_string(), "every-sample");
    }
}
