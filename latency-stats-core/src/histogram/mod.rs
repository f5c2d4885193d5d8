//! Latency histogram engine
//!
//! Samples are recorded in microseconds into two bucket layouts at once:
//!
//! - a **linear** layout with one bucket per µs, exact but bounded by the
//!   configured bucket count
//! - a **power-of-two** layout with 32 buckets, where bucket `b` covers
//!   `(2^(b-1), 2^b]`
//!
//! Percentiles are read from the linear layout first and fall back to the
//! power-of-two layout for targets that only overflowed samples can reach.
//!
//! ```text
//! record -> LinearBuckets + Log2Buckets -> calculate -> render_report / Summary
//! ```

mod engine;
mod error;
mod percentile;
mod render;
mod scheme;
mod summary;

pub use engine::HistogramEngine;
pub use error::HistogramError;
pub use percentile::{Calculation, Percentile, Target};
pub use render::{NO_SAMPLES, UNRESOLVED_BOUND};
pub use scheme::{BucketScheme, LOG_BUCKET_COUNT, LinearBuckets, Log2Buckets, Scheme, log2_ceil};
pub use summary::{PercentileSummary, Summary};
