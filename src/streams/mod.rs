mod csv_file;
pub mod generators;
mod sample_source;

pub use csv_file::CsvSampleSource;
pub use sample_source::{SampleSource, SourceError};
