use anyhow::{Context, Result, bail};
use peakrate::config::{
    ConfigChoice, RunConfig, SourceChoice, SourceKind, build_task, config_schema,
};
use peakrate::evaluation::TraceFormat;
use std::path::PathBuf;
use std::str::FromStr;

const USAGE: &str = "usage:
  peakrate <config.json> [--trace <file>]
  peakrate --template <source-kind>
  peakrate --schema";

#[derive(Debug)]
enum Command {
    Run {
        config: PathBuf,
        trace: Option<PathBuf>,
    },
    Template(SourceKind),
    Schema,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Command> {
    let mut config = None;
    let mut trace = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => return Ok(Command::Schema),
            "--template" => {
                let kind = args.next().context("--template needs a source kind")?;
                let kind = SourceKind::from_str(&kind).with_context(|| {
                    let known: Vec<&str> =
                        SourceChoice::kinds().into_iter().map(|(k, _)| k).collect();
                    format!("unknown source kind '{kind}', expected one of {known:?}")
                })?;
                return Ok(Command::Template(kind));
            }
            "--trace" => {
                trace = Some(PathBuf::from(args.next().context("--trace needs a path")?));
            }
            "-h" | "--help" => bail!("{USAGE}"),
            other if other.starts_with("--") => bail!("unknown flag '{other}'\n{USAGE}"),
            other => {
                if config.replace(PathBuf::from(other)).is_some() {
                    bail!("only one config file may be given\n{USAGE}");
                }
            }
        }
    }

    match config {
        Some(config) => Ok(Command::Run { config, trace }),
        None => bail!("{USAGE}"),
    }
}

fn run(config: PathBuf, trace: Option<PathBuf>) -> Result<()> {
    let mut run_config = RunConfig::load(&config)
        .with_context(|| format!("failed to load {}", config.display()))?;
    if trace.is_some() && run_config.trace_frequency.is_none() {
        log::info!("--trace given without trace_frequency; tracing every sample");
        run_config.trace_frequency = Some(1);
    }
    let mut task = build_task(run_config).context("invalid configuration")?;

    let report = task.run().context("sample source failed")?;
    println!("{report}");
    for m in report.summary.measurements() {
        println!("{:<10} {:.2}", m.name, m.value);
    }

    if let Some(path) = trace {
        let fmt = TraceFormat::from_path(&path);
        task.trace()
            .export(&path, fmt)
            .with_context(|| format!("failed to write trace to {}", path.display()))?;
        log::info!("wrote {} trace points to {}", task.trace().len(), path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match parse_args(std::env::args().skip(1))? {
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&config_schema())?);
        }
        Command::Template(kind) => {
            println!("{}", RunConfig::template(kind)?.to_json_pretty()?);
        }
        Command::Run { config, trace } => run(config, trace)?,
    }
    Ok(())
}
