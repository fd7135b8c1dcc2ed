mod monitor_task;
mod notify_policy;
mod run_report;

pub use monitor_task::MonitorTask;
pub use notify_policy::NotifyPolicy;
pub use run_report::RunReport;
