use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_threshold() -> i32 {
    2000
}

fn default_refractory_ms() -> u32 {
    600
}

fn default_smoothing_window() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MonitorParameters {
    #[serde(default = "default_threshold")]
    #[schemars(
        title = "Threshold",
        description = "Samples strictly above this value are peak candidates (signal units)"
    )]
    pub threshold: i32,

    #[serde(default = "default_refractory_ms")]
    #[schemars(
        title = "Refractory Period (ms)",
        description = "Minimum time between two accepted peaks",
        range(min = 1)
    )]
    pub refractory_ms: u32,

    #[serde(default = "default_smoothing_window")]
    #[schemars(
        title = "Smoothing Window",
        description = "Moving-average length in samples; 1 disables smoothing",
        range(min = 1)
    )]
    pub smoothing_window: usize,

    #[serde(default)]
    #[schemars(
        title = "No-Signal Timeout (ms)",
        description = "Report no signal when no peak is accepted for this long; empty = never"
    )]
    pub no_signal_timeout_ms: Option<u32>,
}

impl Default for MonitorParameters {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            refractory_ms: default_refractory_ms(),
            smoothing_window: default_smoothing_window(),
            no_signal_timeout_ms: None,
        }
    }
}
