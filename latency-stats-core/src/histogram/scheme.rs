use crate::histogram::percentile::{Percentile, Target};
use serde::Serialize;

/// Number of power-of-two buckets. The largest in-range value is `2^31` µs.
pub const LOG_BUCKET_COUNT: usize = 32;

/// Which bucket layout to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Linear,
    PowerOfTwo,
}

/// A fixed set of counting buckets plus an overflow counter.
///
/// Implementors only describe their layout; the cumulative scan used to
/// resolve percentiles is shared.
pub trait BucketScheme {
    /// Bucket index for `value`, or `None` when it falls outside the scheme.
    fn index_of(&self, value: u64) -> Option<usize>;

    /// Upper bound, in µs, represented by the bucket at `index`.
    fn bucket_value(&self, index: usize) -> u64;

    fn counts(&self) -> &[u64];
    fn counts_mut(&mut self) -> &mut [u64];
    fn overflow(&self) -> u64;
    fn overflow_mut(&mut self) -> &mut u64;

    fn record(&mut self, value: u64) {
        match self.index_of(value) {
            Some(index) => self.counts_mut()[index] += 1,
            None => *self.overflow_mut() += 1,
        }
    }

    /// Samples held by the scheme, overflow included.
    fn total(&self) -> u64 {
        self.counts().iter().sum::<u64>() + self.overflow()
    }

    /// Largest value that still lands in a bucket.
    fn max_value(&self) -> u64 {
        self.bucket_value(self.counts().len() - 1)
    }

    fn clear(&mut self) {
        self.counts_mut().fill(0);
        *self.overflow_mut() = 0;
    }

    /// Walks the buckets in index order and fills every still-unresolved
    /// entry of `results` whose target is reached by the running count.
    ///
    /// Entries that are already resolved are left untouched.
    fn resolve(&self, total: u64, targets: &[Target], results: &mut [Percentile]) {
        if total == 0 {
            return;
        }

        let mut accumulated = 0u64;
        for (index, count) in self.counts().iter().enumerate() {
            accumulated += count;

            for (target, result) in targets.iter().zip(results.iter_mut()) {
                if !result.is_resolved() && target.reached(accumulated, total) {
                    *result = Percentile::Resolved(self.bucket_value(index));
                }
            }

            if results.iter().all(Percentile::is_resolved) {
                return;
            }
        }
    }
}

/// One bucket per microsecond: bucket `i` counts samples equal to `i`.
#[derive(Debug, Clone)]
pub struct LinearBuckets {
    counts: Vec<u64>,
    overflow: u64,
}

impl LinearBuckets {
    /// `len` is clamped up to one bucket.
    pub fn new(len: usize) -> Self {
        Self {
            counts: vec![0; len.max(1)],
            overflow: 0,
        }
    }
}

impl BucketScheme for LinearBuckets {
    fn index_of(&self, value: u64) -> Option<usize> {
        usize::try_from(value)
            .ok()
            .filter(|index| *index < self.counts.len())
    }

    fn bucket_value(&self, index: usize) -> u64 {
        index as u64
    }

    fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn counts_mut(&mut self) -> &mut [u64] {
        &mut self.counts
    }

    fn overflow(&self) -> u64 {
        self.overflow
    }

    fn overflow_mut(&mut self) -> &mut u64 {
        &mut self.overflow
    }
}

/// Bucket `b` counts samples in `(2^(b-1), 2^b]`; bucket 0 holds 0 and 1.
#[derive(Debug, Clone)]
pub struct Log2Buckets {
    counts: [u64; LOG_BUCKET_COUNT],
    overflow: u64,
}

impl Log2Buckets {
    pub fn new() -> Self {
        Self {
            counts: [0; LOG_BUCKET_COUNT],
            overflow: 0,
        }
    }
}

impl Default for Log2Buckets {
    fn default() -> Self {
        Self::new()
    }
}

/// `ceil(log2(value))`, with 0 and 1 both mapping to 0.
pub fn log2_ceil(value: u64) -> u32 {
    if value <= 1 {
        0
    } else {
        u64::BITS - (value - 1).leading_zeros()
    }
}

impl BucketScheme for Log2Buckets {
    fn index_of(&self, value: u64) -> Option<usize> {
        let index = log2_ceil(value) as usize;
        (index < LOG_BUCKET_COUNT).then_some(index)
    }

    fn bucket_value(&self, index: usize) -> u64 {
        1u64 << index
    }

    fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn counts_mut(&mut self) -> &mut [u64] {
        &mut self.counts
    }

    fn overflow(&self) -> u64 {
        self.overflow
    }

    fn overflow_mut(&mut self) -> &mut u64 {
        &mut self.overflow
    }
}
