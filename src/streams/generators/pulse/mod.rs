mod pulse_generator;
mod shape;

pub use pulse_generator::{PulseGenerator, PulseTrain};
pub use shape::PulseShape;
