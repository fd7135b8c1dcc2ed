use crate::core::RateEstimate;
use crate::evaluation::RateSummary;
use std::fmt::{Display, Formatter, Result};

/// Counters collected by one run of the sampling loop.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub samples_seen: u64,
    pub samples_skipped: u64,
    pub events: u64,
    pub suppressed: u64,
    pub clock_resets: u64,
    pub signal_losses: u64,
    pub final_rate: RateEstimate,
    pub summary: RateSummary,
}

impl RunReport {
    /// Ticks pulled from the source, processed or skipped.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.samples_seen + self.samples_skipped
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, skipped={}, events={}, suppressed={}, clock_resets={}, signal_losses={}, rate={}",
            self.samples_seen,
            self.samples_skipped,
            self.events,
            self.suppressed,
            self.clock_resets,
            self.signal_losses,
            self.final_rate
        )?;
        if self.summary.rated() > 0 {
            write!(f, ", mean_rate={:.2}", self.summary.mean_rate())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_mean_only_when_rated() {
        let mut r = RunReport {
            samples_seen: 10,
            samples_skipped: 2,
            events: 3,
            suppressed: 4,
            ..RunReport::default()
        };
        assert_eq!(r.ticks(), 12);
        assert_eq!(
            r.to_string(),
            "seen=10, skipped=2, events=3, suppressed=4, clock_resets=0, signal_losses=0, rate=no-signal"
        );

        r.final_rate = RateEstimate::from_interval(800);
        r.summary.add(r.final_rate);
        assert!(r.to_string().ends_with("rate=75/min, mean_rate=75.00"));
    }
}
