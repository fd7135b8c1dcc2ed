use crate::config::choices::ConfigChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_label() -> String {
    "rate".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LogSinkParameters {
    #[serde(default = "default_label")]
    #[schemars(title = "Label", description = "Prefix of every logged line")]
    pub label: String,

    #[serde(default)]
    #[schemars(
        title = "No-Signal Code",
        description = "Number logged while there is no valid rate"
    )]
    pub no_signal_code: u32,
}

impl Default for LogSinkParameters {
    fn default() -> Self {
        Self {
            label: default_label(),
            no_signal_code: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SinkKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SinkChoice {
    #[strum_discriminants(strum(
        message = "Log",
        detailed_message = "Writes each published estimate to the log."
    ))]
    Log(LogSinkParameters),
}

impl Default for SinkChoice {
    fn default() -> Self {
        SinkChoice::Log(LogSinkParameters::default())
    }
}

impl ConfigChoice for SinkChoice {
    type Kind = SinkKind;

    fn schema() -> Schema {
        schema_for!(SinkChoice)
    }

    fn default_params(kind: Self::Kind) -> serde_json::Result<Value> {
        match kind {
            SinkKind::Log => serde_json::to_value(LogSinkParameters::default()),
        }
    }
}
