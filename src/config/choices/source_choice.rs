use crate::config::choices::ConfigChoice;
use crate::streams::generators::PulseShape;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_rate_per_minute() -> u32 {
    72
}

fn default_sample_period_ms() -> u32 {
    10
}

fn default_baseline() -> i32 {
    1500
}

fn default_amplitude() -> i32 {
    1000
}

fn default_pulse_width_ms() -> u32 {
    200
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct CsvFileParameters {
    #[schemars(
        with = "String",
        title = "CSV Path",
        description = "File of `timestamp_ms,value` rows",
        extend("format" = "path")
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PulseGeneratorParameters {
    #[serde(default = "default_rate_per_minute")]
    #[schemars(
        title = "Rate",
        description = "Simulated pulses per minute",
        range(min = 1, max = 60000)
    )]
    pub rate_per_minute: u32,

    #[serde(default = "default_sample_period_ms")]
    #[schemars(
        title = "Sample Period (ms)",
        description = "Time between two samples",
        range(min = 1)
    )]
    pub sample_period_ms: u32,

    #[serde(default = "default_baseline")]
    #[schemars(title = "Baseline", description = "Signal level between pulses")]
    pub baseline: i32,

    #[serde(default = "default_amplitude")]
    #[schemars(
        title = "Amplitude",
        description = "Pulse height above the baseline",
        range(min = 0)
    )]
    pub amplitude: i32,

    #[serde(default = "default_pulse_width_ms")]
    #[schemars(
        title = "Pulse Width (ms)",
        description = "Duration of one pulse; must be shorter than the beat period",
        range(min = 1)
    )]
    pub pulse_width_ms: u32,

    #[serde(default)]
    #[schemars(title = "Pulse Shape", description = "Envelope of a single pulse")]
    pub shape: PulseShape,

    #[serde(default)]
    #[schemars(
        title = "Noise",
        description = "Uniform noise amplitude added to every sample",
        range(min = 0)
    )]
    pub noise_amplitude: i32,

    #[serde(default)]
    #[schemars(
        title = "Dropout",
        description = "Fraction of ticks that fail acquisition (0.0 to 1.0)",
        range(min = 0.0, max = 1.0)
    )]
    pub dropout_fraction: f32,

    #[serde(default)]
    #[schemars(
        title = "Max Samples",
        description = "Upper bound on generated samples; empty = infinite"
    )]
    pub max_samples: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Start (ms)",
        description = "Initial value of the simulated 32-bit uptime clock"
    )]
    pub start_ms: u32,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed")]
    pub seed: u64,
}

impl Default for PulseGeneratorParameters {
    fn default() -> Self {
        Self {
            rate_per_minute: default_rate_per_minute(),
            sample_period_ms: default_sample_period_ms(),
            baseline: default_baseline(),
            amplitude: default_amplitude(),
            pulse_width_ms: default_pulse_width_ms(),
            shape: PulseShape::default(),
            noise_amplitude: 0,
            dropout_fraction: 0.0,
            max_samples: None,
            start_ms: 0,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SourceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SourceChoice {
    #[strum_discriminants(strum(
        message = "CSV File",
        detailed_message = "Replays recorded `timestamp_ms,value` samples."
    ))]
    CsvFile(CsvFileParameters),

    #[strum_discriminants(strum(
        message = "Pulse Generator",
        detailed_message = "Seeded synthetic pulse train with optional noise and dropouts."
    ))]
    PulseGenerator(PulseGeneratorParameters),
}

impl ConfigChoice for SourceChoice {
    type Kind = SourceKind;

    fn schema() -> Schema {
        schema_for!(SourceChoice)
    }

    fn default_params(kind: Self::Kind) -> serde_json::Result<Value> {
        match kind {
            SourceKind::CsvFile => serde_json::to_value(CsvFileParameters::default()),
            SourceKind::PulseGenerator => {
                serde_json::to_value(PulseGeneratorParameters::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tagged_json_round_trip() {
        let c: SourceChoice = serde_json::from_str(
            r#"{"type": "pulse-generator", "params": {"rate_per_minute": 90, "shape": "square"}}"#,
        )
        .unwrap();
        let SourceChoice::PulseGenerator(p) = c else {
            panic!("expected pulse generator");
        };
        assert_eq!(p.rate_per_minute, 90);
        assert_eq!(p.shape, PulseShape::Square);
        assert_eq!(p.sample_period_ms, 10);
        assert_eq!(p.seed, 42);
    }

    #[test]
    fn dropout_is_a_fraction() {
        let c: SourceChoice = serde_json::from_str(
            r#"{"type": "pulse-generator", "params": {"dropout_fraction": 0.25}}"#,
        )
        .unwrap();
        let SourceChoice::PulseGenerator(p) = c else {
            panic!("expected pulse generator");
        };
        assert_eq!(p.dropout_fraction, 0.25);
        assert_eq!(PulseGeneratorParameters::default().dropout_fraction, 0.0);
    }

    #[test]
    fn csv_requires_path() {
        let r: Result<SourceChoice, _> =
            serde_json::from_str(r#"{"type": "csv-file", "params": {}}"#);
        assert!(r.is_err());
    }

    #[test]
    fn kinds_and_defaults() {
        let keys: Vec<&str> = SourceChoice::kinds().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["csv-file", "pulse-generator"]);

        let kind = SourceKind::from_str("pulse-generator").unwrap();
        let c = SourceChoice::with_defaults(kind).unwrap();
        assert!(matches!(c, SourceChoice::PulseGenerator(p) if p.rate_per_minute == 72));
    }

    #[test]
    fn schema_lists_both_variants() {
        let s = serde_json::to_string(&SourceChoice::schema()).unwrap();
        assert!(s.contains("csv-file"));
        assert!(s.contains("pulse-generator"));
        assert!(s.contains("rate_per_minute"));
    }
}
