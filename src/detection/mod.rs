mod detection;
mod estimator_state;
mod peak_rate_estimator;
mod rate_detector;
mod rate_monitor;
mod smoothing_window;

pub use detection::{Detection, SampleOutcome};
pub use estimator_state::{DetectorPhase, EstimatorState};
pub use peak_rate_estimator::PeakRateEstimator;
pub use rate_detector::RateDetector;
pub use rate_monitor::RateMonitor;
pub use smoothing_window::SmoothingWindow;
