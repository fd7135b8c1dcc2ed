use crate::config::build::BuildError;
use crate::config::choices::{CsvFileParameters, PulseGeneratorParameters, SourceChoice};
use crate::streams::generators::{PulseGenerator, PulseTrain};
use crate::streams::{CsvSampleSource, SampleSource};

impl TryFrom<CsvFileParameters> for CsvSampleSource {
    type Error = BuildError;

    fn try_from(parameters: CsvFileParameters) -> Result<Self, Self::Error> {
        if parameters.path.as_os_str().is_empty() {
            return Err(BuildError::InvalidParameter("csv path is empty".into()));
        }
        Ok(CsvSampleSource::open(&parameters.path)?)
    }
}

impl TryFrom<PulseGeneratorParameters> for PulseGenerator {
    type Error = BuildError;

    fn try_from(parameters: PulseGeneratorParameters) -> Result<Self, Self::Error> {
        let dropout_percentage =
            (parameters.dropout_fraction * 100.0).round().clamp(0.0, 100.0) as u32;

        let max_samples = parameters
            .max_samples
            .map(|v| {
                usize::try_from(v).map_err(|_| {
                    BuildError::InvalidParameter("max_samples too large for usize".into())
                })
            })
            .transpose()?;

        let train = PulseTrain {
            rate_per_minute: parameters.rate_per_minute,
            baseline: parameters.baseline,
            amplitude: parameters.amplitude,
            pulse_width_ms: parameters.pulse_width_ms,
            shape: parameters.shape,
        };

        let generator = PulseGenerator::new(
            train,
            parameters.sample_period_ms,
            parameters.noise_amplitude,
            dropout_percentage,
            max_samples,
            parameters.seed,
        )?;
        Ok(generator.with_start_ms(parameters.start_ms))
    }
}

pub fn build_source(choice: SourceChoice) -> Result<Box<dyn SampleSource>, BuildError> {
    match choice {
        SourceChoice::CsvFile(p) => {
            let s = CsvSampleSource::try_from(p)?;
            Ok(Box::new(s))
        }
        SourceChoice::PulseGenerator(p) => {
            let s = PulseGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
