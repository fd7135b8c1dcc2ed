use crate::evaluation::TracePoint;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Csv,
    Tsv,
    Json,
}

impl TraceFormat {
    /// Picks the format from a file extension; anything unknown is CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("tsv") => TraceFormat::Tsv,
            Some("json") => TraceFormat::Json,
            _ => TraceFormat::Csv,
        }
    }
}

/// Per-sample record of what the detector saw and decided.
#[derive(Debug, Default)]
pub struct RateTrace {
    entries: Vec<TracePoint>,
}

impl RateTrace {
    pub fn push(&mut self, point: TracePoint) {
        self.entries.push(point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<TracePoint> {
        self.entries.last().copied()
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TraceFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        match fmt {
            TraceFormat::Csv => self.write_delimited(&mut w, ',')?,
            TraceFormat::Tsv => self.write_delimited(&mut w, '\t')?,
            TraceFormat::Json => self.write_json(&mut w)?,
        }
        w.flush()
    }

    fn write_delimited<W: Write>(&self, w: &mut W, d: char) -> Result<(), Error> {
        writeln!(w, "sample_index{d}timestamp_ms{d}value{d}outcome{d}rate_per_minute")?;
        for p in &self.entries {
            let rate = p.rate_per_minute.map(|r| r.to_string()).unwrap_or_default();
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{}{d}{rate}",
                p.sample_index,
                p.timestamp_ms,
                p.value,
                p.outcome_name()
            )?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        writeln!(w, "[")?;
        for (i, p) in self.entries.iter().enumerate() {
            let sep = if i + 1 == self.entries.len() { "" } else { "," };
            writeln!(w, "  {}{sep}", serde_json::to_string(p)?)?;
        }
        writeln!(w, "]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::SampleOutcome;
    use std::fs;
    use tempfile::NamedTempFile;

    fn point(i: u64, t: u32, v: i32, outcome: SampleOutcome, rate: Option<u32>) -> TracePoint {
        TracePoint {
            sample_index: i,
            timestamp_ms: t,
            value: v,
            outcome,
            rate_per_minute: rate,
        }
    }

    fn two_points() -> RateTrace {
        let mut t = RateTrace::default();
        t.push(point(1, 0, 2500, SampleOutcome::FirstEvent, None));
        t.push(point(
            2,
            700,
            2600,
            SampleOutcome::Accepted { interval_ms: 700 },
            Some(85),
        ));
        t
    }

    #[test]
    fn default_is_empty() {
        let t = RateTrace::default();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.latest().is_none());
    }

    #[test]
    fn push_and_latest() {
        let t = two_points();
        assert_eq!(t.len(), 2);
        assert_eq!(t.latest().unwrap().rate_per_minute, Some(85));
        assert_eq!(
            t.latest().unwrap().to_string(),
            "#2 t=700ms value=2600 accepted rate=85/min"
        );
    }

    #[test]
    fn export_csv() {
        let tf = NamedTempFile::new().unwrap();
        two_points().export(tf.path(), TraceFormat::Csv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
sample_index,timestamp_ms,value,outcome,rate_per_minute
1,0,2500,first-event,
2,700,2600,accepted,85
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv() {
        let tf = NamedTempFile::new().unwrap();
        two_points().export(tf.path(), TraceFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
sample_index\ttimestamp_ms\tvalue\toutcome\trate_per_minute
1\t0\t2500\tfirst-event\t
2\t700\t2600\taccepted\t85
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json() {
        let tf = NamedTempFile::new().unwrap();
        two_points().export(tf.path(), TraceFormat::Json).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
[
  {\"sample_index\":1,\"timestamp_ms\":0,\"value\":2500,\"outcome\":{\"kind\":\"first-event\"},\"rate_per_minute\":null},
  {\"sample_index\":2,\"timestamp_ms\":700,\"value\":2600,\"outcome\":{\"kind\":\"accepted\",\"interval_ms\":700},\"rate_per_minute\":85}
]
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_empty() {
        let t = RateTrace::default();
        let tf = NamedTempFile::new().unwrap();
        t.export(tf.path(), TraceFormat::Json).unwrap();
        assert_eq!(fs::read_to_string(tf.path()).unwrap(), "[\n]\n");

        let tf = NamedTempFile::new().unwrap();
        t.export(tf.path(), TraceFormat::Csv).unwrap();
        assert_eq!(
            fs::read_to_string(tf.path()).unwrap(),
            "sample_index,timestamp_ms,value,outcome,rate_per_minute\n"
        );
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(TraceFormat::from_path("a.json"), TraceFormat::Json);
        assert_eq!(TraceFormat::from_path("a.tsv"), TraceFormat::Tsv);
        assert_eq!(TraceFormat::from_path("a.csv"), TraceFormat::Csv);
        assert_eq!(TraceFormat::from_path("trace"), TraceFormat::Csv);
    }
}
