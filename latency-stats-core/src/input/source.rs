use crate::histogram::HistogramEngine;
use crate::input::error::InputError;
use crate::input::parse::parse_numbers;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

/// Where measurements are read from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl FromStr for InputSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => InputSource::Stdin,
            path => InputSource::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: u64,
    pub measurements: u64,
    pub rejected: u64,
}

impl InputSource {
    /// Reads the whole source into `engine`.
    ///
    /// Failing to open a file is an error. A failure part way through keeps
    /// what was already recorded: it is logged and ingestion stops.
    pub fn ingest(&self, engine: &mut HistogramEngine) -> Result<IngestStats, InputError> {
        match self {
            InputSource::Stdin => {
                let stdin = io::stdin();
                Ok(ingest_reader(stdin.lock(), engine, self))
            }
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| InputError::read_file(path, e))?;
                Ok(ingest_reader(BufReader::new(file), engine, self))
            }
        }
    }
}

/// Feeds every measurement found in `reader` into `engine`, one line at a time.
///
/// Lines are read as raw bytes; bytes that are not valid UTF-8 act as
/// separators like any other non-digit.
pub fn ingest_reader<R: BufRead>(
    mut reader: R,
    engine: &mut HistogramEngine,
    source: &InputSource,
) -> IngestStats {
    let mut stats = IngestStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                let err = match source {
                    InputSource::Stdin => InputError::read_stdin(e),
                    InputSource::File(path) => InputError::read_file(path, e),
                };
                tracing::warn!(error = %err, "stopping ingestion early");
                break;
            }
        }
        stats.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        for measurement in parse_numbers(&line) {
            match measurement {
                Ok(value) => {
                    engine.record(value);
                    stats.measurements += 1;
                }
                Err(err) => {
                    tracing::warn!(line = stats.lines, error = %err, "skipping token");
                    stats.rejected += 1;
                }
            }
        }
    }

    tracing::debug!(
        source = %source,
        lines = stats.lines,
        measurements = stats.measurements,
        rejected = stats.rejected,
        "ingestion finished"
    );

    stats
}
