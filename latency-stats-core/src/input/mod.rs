//! Measurement input
//!
//! Text is read line by line from a file or stdin, split on anything that is
//! not a digit, and every number is recorded as a µs latency.

mod error;
mod parse;
mod source;

pub use error::InputError;
pub use parse::parse_numbers;
pub use source::{IngestStats, InputSource, ingest_reader};
