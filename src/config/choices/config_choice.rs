use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Contract for the tagged `{ "type": .., "params": .. }` configuration enums.
pub trait ConfigChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema;

    /// Default `params` JSON for a given kind.
    fn default_params(kind: Self::Kind) -> serde_json::Result<Value>;

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> serde_json::Result<Self> {
        let key: &'static str = kind.into();
        serde_json::from_value(json!({ "type": key, "params": params }))
    }

    fn with_defaults(kind: Self::Kind) -> serde_json::Result<Self> {
        Self::from_parts(kind, Self::default_params(kind)?)
    }

    /// `(key, message)` for every kind, for listing in help output.
    fn kinds() -> Vec<(&'static str, &'static str)> {
        Self::Kind::iter()
            .map(|k| {
                let message = k.get_message().unwrap_or("");
                (k.into(), message)
            })
            .collect()
    }
}
