use crate::core::RateEstimate;
use crate::evaluation::{Estimator, MeanEstimator, Measurement};

/// Aggregate of the rates emitted by accepted events over a run.
///
/// Events whose interval produced no rate (e.g. a gap longer than a minute)
/// are counted separately as `unrated`.
#[derive(Debug, Clone, Default)]
pub struct RateSummary<E: Estimator + Default = MeanEstimator> {
    mean: E,
    min: Option<u32>,
    max: Option<u32>,
    unrated: u64,
}

impl<E: Estimator + Default> RateSummary<E> {
    pub fn add(&mut self, rate: RateEstimate) {
        let Some(r) = rate.per_minute() else {
            self.unrated += 1;
            return;
        };
        self.mean.add(f64::from(r));
        self.min = Some(self.min.map_or(r, |m| m.min(r)));
        self.max = Some(self.max.map_or(r, |m| m.max(r)));
    }

    pub fn rated(&self) -> u64 {
        self.mean.count()
    }

    pub fn unrated(&self) -> u64 {
        self.unrated
    }

    pub fn mean_rate(&self) -> f64 {
        self.mean.estimation()
    }

    pub fn min_rate(&self) -> Option<u32> {
        self.min
    }

    pub fn max_rate(&self) -> Option<u32> {
        self.max
    }

    pub fn measurements(&self) -> Vec<Measurement> {
        let opt = |v: Option<u32>| v.map_or(f64::NAN, f64::from);
        vec![
            Measurement::new("rated_events", self.rated() as f64),
            Measurement::new("unrated_events", self.unrated as f64),
            Measurement::new("mean_rate", self.mean_rate()),
            Measurement::new("min_rate", opt(self.min)),
            Measurement::new("max_rate", opt(self.max)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary() {
        let s: RateSummary = RateSummary::default();
        assert_eq!(s.rated(), 0);
        assert!(s.mean_rate().is_nan());
        assert_eq!(s.min_rate(), None);
        let m = s.measurements();
        assert_eq!(m.len(), 5);
        assert_eq!(m[0], Measurement::new("rated_events", 0.0));
        assert!(m[3].value.is_nan());
    }

    #[test]
    fn tracks_mean_min_max_and_unrated() {
        let mut s: RateSummary = RateSummary::default();
        for interval in [800, 750, 1000] {
            s.add(RateEstimate::from_interval(interval));
        }
        s.add(RateEstimate::NoSignal);

        assert_eq!(s.rated(), 3);
        assert_eq!(s.unrated(), 1);
        assert!((s.mean_rate() - (75.0 + 80.0 + 60.0) / 3.0).abs() < 1e-12);
        assert_eq!(s.min_rate(), Some(60));
        assert_eq!(s.max_rate(), Some(80));

        let names: Vec<String> = s.measurements().into_iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["rated_events", "unrated_events", "mean_rate", "min_rate", "max_rate"]
        );
    }
}
