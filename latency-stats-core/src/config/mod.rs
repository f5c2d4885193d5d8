mod error;
mod histogram_config;
#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use histogram_config::{DEFAULT_LINEAR_BUCKETS, DEFAULT_PERCENTILES, HistogramConfig};
