use crate::config::choices::RunConfig;
use schemars::{Schema, schema_for};

/// JSON Schema of the run configuration file.
pub fn config_schema() -> Schema {
    schema_for!(RunConfig)
}
