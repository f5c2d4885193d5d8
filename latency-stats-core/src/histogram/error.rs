use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistogramError {
    #[error("latency measurement must not be negative, got {value}")]
    NegativeMeasurement { value: i64 },
}
