use serde::Serialize;
use std::fmt;

/// Outcome of resolving a single percentile target against the bucket counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "micros", rename_all = "snake_case")]
pub enum Percentile {
    /// The target is covered by a bucket whose upper bound is this many µs.
    Resolved(u64),
    /// No in-range bucket reached the target, usually because of overflow.
    #[default]
    Unresolved,
}

impl Percentile {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Percentile::Resolved(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Percentile::Resolved(v) => Some(*v),
            Percentile::Unresolved => None,
        }
    }
}

/// Result of a `calculate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    /// Nothing has been recorded, every target stays unresolved.
    NoSamples,
    Calculated { samples: u64 },
}

/// A percentile threshold in the `[0, 100]` range, e.g. `99.9`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Target(pub f64);

impl Target {
    /// True once `accumulated` out of `total` samples reach this target.
    ///
    /// Compared as `accumulated * 100 >= target * total` so targets such as
    /// 99.9 do not lose the boundary sample to a rounded division.
    pub(crate) fn reached(&self, accumulated: u64, total: u64) -> bool {
        accumulated as f64 * 100.0 >= self.0 * total as f64
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 50.0 prints as "50", 99.9 stays "99.9"
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Target {
    fn from(value: f64) -> Self {
        Target(value)
    }
}
