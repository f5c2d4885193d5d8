use crate::histogram::engine::HistogramEngine;
use crate::histogram::percentile::{Percentile, Target};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileSummary {
    pub target: Target,
    pub result: Percentile,
}

/// Point-in-time view of an engine, shaped for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub samples: u64,
    pub average_us: f64,
    pub percentiles: Vec<PercentileSummary>,
    pub linear_buckets: usize,
    pub linear_overflow: u64,
    pub log_overflow: u64,
}

impl Summary {
    pub(crate) fn from_engine(engine: &HistogramEngine) -> Self {
        Self {
            samples: engine.count(),
            average_us: engine.average(),
            percentiles: engine
                .targets()
                .iter()
                .zip(engine.results())
                .map(|(target, result)| PercentileSummary {
                    target: *target,
                    result: *result,
                })
                .collect(),
            linear_buckets: engine.linear_bucket_count(),
            linear_overflow: engine.linear_overflow(),
            log_overflow: engine.log_overflow(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
