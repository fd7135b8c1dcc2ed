mod signals;

pub use signals::{reference_scenario, square_beats};
