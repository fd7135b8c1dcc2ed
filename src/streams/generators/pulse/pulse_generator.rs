use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{MS_PER_MINUTE, Millis, Sample};
use crate::streams::generators::PulseShape;
use crate::streams::{SampleSource, SourceError};

/// Shape of the simulated periodic signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseTrain {
    pub rate_per_minute: u32,
    pub baseline: i32,
    pub amplitude: i32,
    pub pulse_width_ms: Millis,
    pub shape: PulseShape,
}

impl PulseTrain {
    #[inline]
    fn period_ms(&self) -> f64 {
        f64::from(MS_PER_MINUTE) / f64::from(self.rate_per_minute)
    }
}

/// Seeded synthetic pulse source sampled on a fixed cadence.
///
/// Produces one pulse per beat period on top of a flat baseline, with
/// optional uniform noise. A configurable share of ticks fail as
/// acquisition errors to exercise the skip path of the sampling loop.
/// Timestamps follow a wrapping 32-bit millisecond clock starting at
/// `start_ms`.
#[derive(Debug)]
pub struct PulseGenerator {
    seed: u64,
    rng: StdRng,
    train: PulseTrain,
    sample_period_ms: Millis,
    noise_amplitude: i32,
    dropout_percentage: u32,
    start_ms: Millis,
    clock_ms: Millis,
    elapsed_ms: u64,
    max_samples: Option<usize>,
    produced: usize,
}

impl PulseGenerator {
    pub fn new(
        train: PulseTrain,
        sample_period_ms: Millis,
        noise_amplitude: i32,
        dropout_percentage: u32,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if train.rate_per_minute == 0 || train.rate_per_minute > MS_PER_MINUTE {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "rate per minute must be in [1, 60000]",
            ));
        }
        if train.pulse_width_ms == 0 || f64::from(train.pulse_width_ms) >= train.period_ms() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "pulse width must be > 0 and shorter than the beat period",
            ));
        }
        if train.amplitude < 0 || noise_amplitude < 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "amplitude and noise must be non-negative",
            ));
        }
        if sample_period_ms == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample period must be > 0 ms",
            ));
        }
        if dropout_percentage > 100 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "dropout percentage must be in [0, 100]",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            train,
            sample_period_ms,
            noise_amplitude,
            dropout_percentage,
            start_ms: 0,
            clock_ms: 0,
            elapsed_ms: 0,
            max_samples,
            produced: 0,
        })
    }

    /// Starts the simulated uptime clock at `start_ms` instead of zero.
    pub fn with_start_ms(mut self, start_ms: Millis) -> Self {
        self.start_ms = start_ms;
        self.clock_ms = start_ms;
        self
    }

    pub fn train(&self) -> &PulseTrain {
        &self.train
    }

    fn clean_level(&self) -> f64 {
        let phase = self.elapsed_ms as f64 % self.train.period_ms();
        let position = phase / f64::from(self.train.pulse_width_ms);
        let level = self.train.shape.level(position);
        f64::from(self.train.baseline) + f64::from(self.train.amplitude) * level
    }

    #[inline]
    fn noise(&mut self) -> i32 {
        if self.noise_amplitude == 0 {
            0
        } else {
            self.rng
                .random_range(-self.noise_amplitude..=self.noise_amplitude)
        }
    }

    #[inline]
    fn dropped(&mut self) -> bool {
        let roll: u32 = self.rng.random_range(1..=100);
        roll <= self.dropout_percentage
    }

    fn advance(&mut self) {
        self.clock_ms = self.clock_ms.wrapping_add(self.sample_period_ms);
        self.elapsed_ms += u64::from(self.sample_period_ms);
        self.produced += 1;
    }
}

impl SampleSource for PulseGenerator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.map_or(true, |max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<Result<Sample, SourceError>> {
        if !self.has_more_samples() {
            return None;
        }

        let timestamp_ms = self.clock_ms;
        let level = self.clean_level().round() as i64 + i64::from(self.noise());
        let dropped = self.dropped();
        self.advance();

        if dropped {
            return Some(Err(SourceError::Acquisition(format!(
                "simulated dropout at {timestamp_ms}ms"
            ))));
        }
        let value = level.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Some(Ok(Sample::new(value, timestamp_ms)))
    }

    fn restart(&mut self) -> Result<(), SourceError> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.clock_ms = self.start_ms;
        self.elapsed_ms = 0;
        self.produced = 0;
        Ok(())
    }
}
