mod pulse;

pub use pulse::{PulseGenerator, PulseShape, PulseTrain};
