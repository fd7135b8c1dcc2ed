mod config_choice;
mod monitor_parameters;
mod run_config;
mod schema;
mod sink_choice;
mod source_choice;

pub use config_choice::ConfigChoice;
pub use monitor_parameters::MonitorParameters;
pub use run_config::RunConfig;
pub use schema::config_schema;
pub use sink_choice::*;
pub use source_choice::*;
