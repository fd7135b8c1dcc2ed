use crate::core::{Millis, Sample};

/// Square pulses: `high` for `width_ms` at the start of every `period_ms`,
/// `low` otherwise, sampled every `step_ms` for `beats` periods.
pub fn square_beats(
    beats: u32,
    period_ms: Millis,
    width_ms: Millis,
    step_ms: Millis,
    low: i32,
    high: i32,
) -> Vec<Sample> {
    (0..beats * period_ms)
        .step_by(step_ms as usize)
        .map(|t| {
            let v = if t % period_ms < width_ms { high } else { low };
            Sample::new(v, t)
        })
        .collect()
}

/// threshold 2000, refractory 600: rates `-, -, 85, 85, 85`.
pub fn reference_scenario() -> Vec<Sample> {
    vec![
        Sample::new(2500, 0),
        Sample::new(2500, 300),
        Sample::new(2500, 700),
        Sample::new(1000, 900),
        Sample::new(2600, 1_400),
    ]
}
