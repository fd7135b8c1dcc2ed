use crate::core::Sample;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The acquisition hardware (or its simulation) failed for this tick.
    #[error("acquisition failed: {0}")]
    Acquisition(String),

    #[error("malformed sample on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Whether the driving loop should skip this tick and keep going.
    ///
    /// Only I/O failures of the underlying source end a run.
    #[inline]
    pub fn is_skippable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Pull-based producer of timestamped samples.
///
/// A tick whose acquisition failed is reported as `Some(Err(..))`; the
/// caller skips it without invoking the detector, so interval math keeps
/// referring to the last accepted event.
pub trait SampleSource {
    /// Indicates whether the source *may* produce more samples.
    ///
    /// Must be cheap. Once it returns `false`, [`next_sample`] returns `None`.
    ///
    /// [`next_sample`]: SampleSource::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next tick, or `None` when the source is exhausted.
    fn next_sample(&mut self) -> Option<Result<Sample, SourceError>>;

    /// Rewinds to the first sample (re-opens files, re-seeds generators).
    fn restart(&mut self) -> Result<(), SourceError>;
}
