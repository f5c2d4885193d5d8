use crate::histogram::error::HistogramError;
use crate::histogram::percentile::{Calculation, Percentile, Target};
use crate::histogram::render::{render_histogram, render_report};
use crate::histogram::scheme::{BucketScheme, LinearBuckets, Log2Buckets, Scheme};
use crate::histogram::summary::Summary;

/// Streaming latency histogram over two bucket layouts.
///
/// Every sample lands in both a linear layout (exact µs, bounded by the
/// configured bucket count) and a power-of-two layout (coarse, 32 buckets).
/// Percentiles prefer the linear layout and fall back to the power-of-two one
/// for targets the linear buckets cannot reach.
///
/// The engine is a plain owned value. It does no locking; callers that ingest
/// from several threads keep one engine per thread or wrap it in a mutex.
#[derive(Debug, Clone)]
pub struct HistogramEngine {
    linear: LinearBuckets,
    log2: Log2Buckets,
    targets: Vec<Target>,
    results: Vec<Percentile>,
    count: u64,
    average: f64,
}

impl HistogramEngine {
    /// A `linear_bucket_count` below 1 is clamped to 1.
    pub fn new<T>(linear_bucket_count: usize, targets: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Target>,
    {
        let targets: Vec<Target> = targets.into_iter().map(Into::into).collect();
        let results = vec![Percentile::Unresolved; targets.len()];

        Self {
            linear: LinearBuckets::new(linear_bucket_count),
            log2: Log2Buckets::new(),
            targets,
            results,
            count: 0,
            average: 0.0,
        }
    }

    /// Records a signed measurement, rejecting negative values without
    /// touching any counter.
    pub fn add(&mut self, measurement: i64) -> Result<(), HistogramError> {
        let value = u64::try_from(measurement).map_err(|_| HistogramError::NegativeMeasurement {
            value: measurement,
        })?;
        self.record(value);
        Ok(())
    }

    /// Records a measurement in µs.
    pub fn record(&mut self, measurement: u64) {
        let n = self.count as f64;
        self.average = (n * self.average + measurement as f64) / (n + 1.0);
        self.count += 1;

        self.log2.record(measurement);
        self.linear.record(measurement);
    }

    /// Resolves every percentile target from the current bucket counts.
    ///
    /// Linear buckets are scanned first so exact values win; the
    /// power-of-two scan only fills targets that are still unresolved.
    pub fn calculate(&mut self) -> Calculation {
        self.results.fill(Percentile::Unresolved);

        let total = self.log2.total();
        if total == 0 {
            return Calculation::NoSamples;
        }

        self.linear.resolve(total, &self.targets, &mut self.results);
        self.log2.resolve(total, &self.targets, &mut self.results);

        Calculation::Calculated { samples: total }
    }

    /// Text bar chart of one bucket layout.
    pub fn histogram(&self, scheme: Scheme) -> String {
        match scheme {
            Scheme::Linear => render_histogram(&self.linear),
            Scheme::PowerOfTwo => render_histogram(&self.log2),
        }
    }

    /// Calculates percentiles and renders the percentile block followed by
    /// both histograms.
    pub fn report(&mut self) -> String {
        self.calculate();
        render_report(self)
    }

    /// Calculates percentiles and captures them as a serializable value.
    pub fn summary(&mut self) -> Summary {
        self.calculate();
        Summary::from_engine(self)
    }

    pub fn reset(&mut self) {
        self.linear.clear();
        self.log2.clear();
        self.results.fill(Percentile::Unresolved);
        self.count = 0;
        self.average = 0.0;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Results of the last `calculate`, parallel to `targets`.
    pub fn results(&self) -> &[Percentile] {
        &self.results
    }

    pub fn linear_bucket_count(&self) -> usize {
        self.linear.counts().len()
    }

    pub fn linear_buckets(&self) -> &[u64] {
        self.linear.counts()
    }

    pub fn log_buckets(&self) -> &[u64] {
        self.log2.counts()
    }

    pub fn linear_overflow(&self) -> u64 {
        self.linear.overflow()
    }

    pub fn log_overflow(&self) -> u64 {
        self.log2.overflow()
    }

    pub(crate) fn max_log_value(&self) -> u64 {
        self.log2.max_value()
    }
}
