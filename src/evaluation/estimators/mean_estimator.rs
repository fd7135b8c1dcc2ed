use crate::evaluation::Estimator;

/// Running arithmetic mean. `NaN` observations are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEstimator {
    count: u64,
    sum: f64,
}

impl Estimator for MeanEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.count += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.count
    }
}
