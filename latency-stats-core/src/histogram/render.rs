use crate::histogram::engine::HistogramEngine;
use crate::histogram::percentile::Percentile;
use crate::histogram::scheme::{BucketScheme, LOG_BUCKET_COUNT, Scheme};
use std::fmt::Write;

pub const NO_SAMPLES: &str = "<no samples>";

/// Shown for targets that no in-range bucket could satisfy.
pub const UNRESOLVED_BOUND: u64 = 1 << LOG_BUCKET_COUNT;

const BAR_WIDTH: f64 = 100.0;

/// `round(count / total * 100)` stars, never fewer than one for a non-empty
/// bucket.
fn bar(count: u64, total: u64) -> String {
    let len = ((count as f64 / total as f64) * BAR_WIDTH).round() as usize;
    let len = if count > 0 { len.max(1) } else { len };
    "*".repeat(len)
}

pub(crate) fn render_histogram<S: BucketScheme>(scheme: &S) -> String {
    let total = scheme.total();
    if total == 0 {
        return format!("{NO_SAMPLES}\n");
    }

    let counts = scheme.counts();
    let mut rows: Vec<(String, u64)> = Vec::new();

    if let (Some(first), Some(last)) = (
        counts.iter().position(|c| *c > 0),
        counts.iter().rposition(|c| *c > 0),
    ) {
        for (index, count) in counts.iter().enumerate().take(last + 1).skip(first) {
            rows.push((scheme.bucket_value(index).to_string(), *count));
        }
    }

    if scheme.overflow() > 0 {
        rows.push((format!(">{}", scheme.max_value()), scheme.overflow()));
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in rows {
        let _ = writeln!(out, "{label:>width$} {}", bar(count, total));
    }
    out
}

fn render_percentiles(out: &mut String, engine: &HistogramEngine) {
    let labels: Vec<String> = engine.targets().iter().map(ToString::to_string).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    for (label, result) in labels.iter().zip(engine.results()) {
        let _ = match result {
            Percentile::Resolved(v) => writeln!(out, "{label:>width$} <= {v}μs"),
            Percentile::Unresolved => writeln!(out, "{label:>width$} > {UNRESOLVED_BOUND}μs"),
        };
    }
}

/// An empty engine prints `<no samples>` in place of the percentile lines.
pub(crate) fn render_report(engine: &HistogramEngine) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} samples, average {:.2}",
        engine.count(),
        engine.average()
    );

    if engine.is_empty() {
        let _ = writeln!(out, "{NO_SAMPLES}");
    } else {
        render_percentiles(&mut out, engine);
    }

    if engine.log_overflow() > 0 {
        let _ = writeln!(
            out,
            "WARNING: {} samples above {}μs",
            engine.log_overflow(),
            engine.max_log_value()
        );
    }

    out.push_str("Linear histogram (μs):\n");
    out.push_str(&engine.histogram(Scheme::Linear));
    out.push_str("Power-of-two histogram (μs):\n");
    out.push_str(&engine.histogram(Scheme::PowerOfTwo));

    out
}
