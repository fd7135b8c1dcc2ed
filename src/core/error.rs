use crate::core::Millis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("refractory period must be > 0 ms")]
    ZeroRefractoryPeriod,

    #[error("smoothing window must hold at least one sample")]
    EmptySmoothingWindow,

    #[error(
        "no-signal timeout ({timeout_ms} ms) must exceed the refractory period ({refractory_ms} ms)"
    )]
    TimeoutWithinRefractory {
        timeout_ms: Millis,
        refractory_ms: Millis,
    },
}
