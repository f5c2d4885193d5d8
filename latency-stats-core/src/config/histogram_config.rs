use crate::config::error::ConfigError;
use crate::histogram::HistogramEngine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LINEAR_BUCKETS: usize = 1000;
pub const DEFAULT_PERCENTILES: &[f64] = &[50.0, 80.0, 99.0, 99.9, 100.0];

fn default_linear_buckets() -> usize {
    DEFAULT_LINEAR_BUCKETS
}

fn default_percentiles() -> Vec<f64> {
    DEFAULT_PERCENTILES.to_vec()
}

/// Engine configuration, usually read from a TOML file:
///
/// ```toml
/// linear_buckets = 5000
/// percentiles = [50, 90, 99, 99.9]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistogramConfig {
    #[serde(default = "default_linear_buckets")]
    pub linear_buckets: usize,

    #[serde(default = "default_percentiles")]
    pub percentiles: Vec<f64>,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            linear_buckets: default_linear_buckets(),
            percentiles: default_percentiles(),
        }
    }
}

impl HistogramConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies command line overrides. An empty `percentiles` slice keeps the
    /// configured ones.
    pub fn with_overrides(mut self, linear_buckets: Option<usize>, percentiles: &[f64]) -> Self {
        if let Some(n) = linear_buckets {
            self.linear_buckets = n;
        }
        if !percentiles.is_empty() {
            self.percentiles = percentiles.to_vec();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.percentiles.is_empty() {
            return Err(ConfigError::NoPercentiles);
        }

        if let Some(&value) = self
            .percentiles
            .iter()
            .find(|p| !p.is_finite() || !(0.0..=100.0).contains(*p))
        {
            return Err(ConfigError::InvalidPercentile { value });
        }

        Ok(())
    }

    /// Validates and builds an empty engine. A zero bucket count is raised
    /// to one.
    pub fn build_engine(&self) -> Result<HistogramEngine, ConfigError> {
        self.validate()?;

        if self.linear_buckets == 0 {
            tracing::warn!("linear_buckets = 0, using a single linear bucket");
        }

        Ok(HistogramEngine::new(
            self.linear_buckets,
            self.percentiles.iter().copied(),
        ))
    }
}
