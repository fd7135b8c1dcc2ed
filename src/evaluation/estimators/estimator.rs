/// Online scalar estimator fed one observation at a time.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// Current estimate, `NaN` before the first observation.
    fn estimation(&self) -> f64;

    fn count(&self) -> u64;
}
