use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use strum_macros::{Display, EnumIter};

/// Envelope of a single pulse over its width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PulseShape {
    /// Smooth rise and fall, close to an optical pulse waveform.
    #[default]
    RaisedCosine,
    Square,
    Triangle,
}

impl PulseShape {
    /// Level in `[0, 1]` at `position` in `[0, 1)` through the pulse.
    pub fn level(self, position: f64) -> f64 {
        if !(0.0..1.0).contains(&position) {
            return 0.0;
        }
        match self {
            PulseShape::RaisedCosine => 0.5 * (1.0 - (TAU * position).cos()),
            PulseShape::Square => 1.0,
            PulseShape::Triangle => 1.0 - (2.0 * position - 1.0).abs(),
        }
    }
}
