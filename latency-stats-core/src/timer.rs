//! Wall-clock checkpoint timer.
//!
//! Marks named points in time and reports the µs elapsed between each pair
//! of neighbours. Intervals can be recorded straight into a
//! [`HistogramEngine`].

use crate::histogram::HistogramEngine;
use chrono::Utc;
use std::fmt::Write;

pub const NO_MEASUREMENTS: &str = "<no measurements>";

/// Microseconds since the Unix epoch.
pub fn timestamp_micros() -> u64 {
    u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub from: String,
    pub to: String,
    pub micros: u64,
}

#[derive(Debug, Clone)]
pub struct LatencyTimer {
    name: String,
    checkpoints: Vec<(String, u64)>,
}

impl LatencyTimer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checkpoints: Vec::with_capacity(10),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn checkpoint(&mut self, label: impl Into<String>) {
        self.checkpoint_at(label, timestamp_micros());
    }

    /// Records a checkpoint with an explicit timestamp in µs.
    pub fn checkpoint_at(&mut self, label: impl Into<String>, micros: u64) {
        self.checkpoints.push((label.into(), micros));
    }

    /// Elapsed time between each pair of neighbouring checkpoints. A clock
    /// that stepped backwards yields 0 rather than wrapping.
    pub fn intervals(&self) -> Vec<Interval> {
        self.checkpoints
            .windows(2)
            .map(|pair| Interval {
                from: pair[0].0.clone(),
                to: pair[1].0.clone(),
                micros: pair[1].1.saturating_sub(pair[0].1),
            })
            .collect()
    }

    pub fn output(&self) -> String {
        if self.checkpoints.is_empty() {
            return NO_MEASUREMENTS.to_string();
        }

        let mut out = String::new();
        for interval in self.intervals() {
            let _ = writeln!(
                out,
                "{} - {}: {} usec",
                interval.from, interval.to, interval.micros
            );
        }
        out
    }

    pub fn record_into(&self, engine: &mut HistogramEngine) {
        for interval in self.intervals() {
            engine.record(interval.micros);
        }
    }

    pub fn clear(&mut self) {
        self.checkpoints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn timer() -> LatencyTimer {
        let mut timer = LatencyTimer::new("request");
        timer.checkpoint_at("accept", 1_000);
        timer.checkpoint_at("parse", 1_250);
        timer.checkpoint_at("respond", 2_000);
        timer
    }

    #[test]
    fn empty_timer_has_no_measurements() {
        assert_eq!(LatencyTimer::new("idle").output(), NO_MEASUREMENTS);
    }

    #[test]
    fn single_checkpoint_has_no_intervals() {
        let mut timer = LatencyTimer::new("one");
        timer.checkpoint("start");

        assert!(timer.intervals().is_empty());
        assert_eq!(timer.output(), "");
    }

    #[test]
    fn output_lists_neighbouring_intervals() {
        assert_eq!(
            timer().output(),
            "accept - parse: 250 usec\nparse - respond: 750 usec\n"
        );
    }

    #[test]
    fn backwards_clock_gives_zero_interval() {
        let mut timer = LatencyTimer::new("skew");
        timer.checkpoint_at("a", 500);
        timer.checkpoint_at("b", 400);

        assert_eq!(timer.intervals()[0].micros, 0);
    }

    #[test]
    fn live_checkpoints_are_ordered() {
        let mut timer = LatencyTimer::new("live");
        timer.checkpoint("a");
        timer.checkpoint("b");

        assert_eq!(timer.intervals().len(), 1);
        assert!(timestamp_micros() > 0);
    }

    #[test]
    fn record_into_feeds_intervals_to_engine() {
        let mut engine = HistogramEngine::new(1_000, [100.0]);

        timer().record_into(&mut engine);
        engine.calculate();

        assert_eq!(engine.count(), 2);
        assert_eq!(engine.results()[0].value(), Some(750));
    }
}
