use crate::config::HistogramConfig;
use crate::input::InputSource;
use crate::timer::LatencyTimer;
use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// File with latency measurements in µs, or '-' to read stdin
    pub input: InputSource,

    /// TOML file with `linear_buckets` and `percentiles`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of 1µs linear buckets
    #[arg(long)]
    pub buckets: Option<usize>,

    /// Percentile to report, 0-100 (repeatable)
    #[arg(short, long = "percentile", value_name = "P")]
    pub percentiles: Vec<f64>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    fn resolve_config(&self) -> Result<HistogramConfig> {
        let cfg = match &self.config {
            Some(path) => HistogramConfig::from_file(path)?,
            None => HistogramConfig::default(),
        };
        Ok(cfg.with_overrides(self.buckets, &self.percentiles))
    }
}

/// Reads every measurement from the input and prints the report to stdout.
pub fn run(args: ReportArgs) -> Result<()> {
    let mut timer = LatencyTimer::new("report");
    timer.checkpoint("start");

    let cfg = args.resolve_config()?;
    let mut engine = cfg.build_engine()?;

    let stats = args
        .input
        .ingest(&mut engine)
        .with_context(|| format!("failed to ingest measurements from {}", args.input))?;
    timer.checkpoint("ingest");

    if stats.rejected > 0 {
        tracing::warn!(rejected = stats.rejected, "some tokens were not valid measurements");
    }

    let output = if args.json {
        engine.summary().to_json()?
    } else {
        engine.report()
    };
    timer.checkpoint("render");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    stdout.flush()?;

    let phases = timer.output();
    tracing::debug!(timer = timer.name(), phases = %phases.trim_end(), "done");

    Ok(())
}

/// Prints a failure to stderr, highlighted when stderr is a terminal.
pub fn print_error(err: &anyhow::Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}: {err:#}", "error".red().bold());
    } else {
        eprintln!("error: {err:#}");
    }
}
