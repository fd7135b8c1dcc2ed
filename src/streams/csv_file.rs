use crate::core::{Millis, Sample};
use crate::streams::{SampleSource, SourceError};
use crate::utils::file_parsing::{split_record, unquote};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Replays `timestamp_ms,value` rows from a text file.
///
/// Blank lines and `#` comments are skipped, as is a single header row
/// before the first data row. Rows that cannot be parsed are reported as
/// [`SourceError::Malformed`] and the stream continues with the next row.
pub struct CsvSampleSource {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    line_no: usize,
    seen_data: bool,
    exhausted: bool,
}

impl CsvSampleSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let reader = BufReader::new(File::open(&path)?);
        Ok(Self {
            path,
            reader,
            buf: Vec::new(),
            line_no: 0,
            seen_data: false,
            exhausted: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(&mut self, line: &str) -> Option<Result<Sample, SourceError>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let fields = split_record(line, ',');
        let malformed = |reason: String| SourceError::Malformed {
            line: self.line_no,
            reason,
        };

        if fields.len() != 2 {
            return Some(Err(malformed(format!(
                "expected 2 fields, got {}",
                fields.len()
            ))));
        }

        let ts = unquote(fields[0]);
        let value = unquote(fields[1]);

        let timestamp_ms = match ts.parse::<Millis>() {
            Ok(t) => t,
            Err(_) if !self.seen_data && ts.chars().any(char::is_alphabetic) => {
                self.seen_data = true;
                return None;
            }
            Err(e) => return Some(Err(malformed(format!("timestamp {ts:?}: {e}")))),
        };
        self.seen_data = true;

        match value.parse::<i32>() {
            Ok(v) => Some(Ok(Sample::new(v, timestamp_ms))),
            Err(e) => Some(Err(malformed(format!("value {value:?}: {e}")))),
        }
    }
}

impl SampleSource for CsvSampleSource {
    fn has_more_samples(&self) -> bool {
        !self.exhausted
    }

    fn next_sample(&mut self) -> Option<Result<Sample, SourceError>> {
        while !self.exhausted {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e.into()));
                }
            }
            self.line_no += 1;

            let line = match String::from_utf8(std::mem::take(&mut self.buf)) {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(SourceError::Malformed {
                        line: self.line_no,
                        reason: format!("invalid UTF-8: {e}"),
                    }));
                }
            };
            if let Some(parsed) = self.parse_line(&line) {
                return Some(parsed);
            }
        }
        None
    }

    fn restart(&mut self) -> Result<(), SourceError> {
        self.reader = BufReader::new(File::open(&self.path)?);
        self.buf.clear();
        self.line_no = 0;
        self.seen_data = false;
        self.exhausted = false;
        Ok(())
    }
}
