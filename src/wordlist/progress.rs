//! Progress telemetry for generation runs
//!
//! The generation loop hands updates to a [`ProgressObserver`]; rendering
//! lives with the caller, not in the enumeration itself.

use std::time::Duration;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Snapshot handed to the observer after a word is written
#[derive(Debug)]
pub struct ProgressUpdate<'a> {
    /// Words written so far
    pub words_generated: u64,
    /// Authoritative total for the run, fixed at start
    pub total: &'a BigUint,
    /// Time since the run started
    pub elapsed: Duration,
    /// Estimated time to completion at the current throughput
    pub eta: Duration,
}

impl<'a> ProgressUpdate<'a> {
    /// Build an update, deriving the ETA from current throughput.
    ///
    /// With zero words written there is no throughput to extrapolate, so
    /// the ETA is reported as zero rather than failing.
    pub fn new(words_generated: u64, total: &'a BigUint, elapsed: Duration) -> Self {
        let eta = if words_generated == 0 {
            Duration::ZERO
        } else {
            let remaining = total - words_generated;
            let per_word = elapsed.as_secs_f64() / words_generated as f64;
            let secs = remaining.to_f64().unwrap_or(f64::INFINITY) * per_word;
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        };

        Self {
            words_generated,
            total,
            elapsed,
            eta,
        }
    }
}

/// Receiver for generation telemetry
pub trait ProgressObserver {
    /// Called after every written word (verbosity >= 1)
    fn on_word(&mut self, update: &ProgressUpdate<'_>);

    /// Called every 1000 written words (verbosity >= 3)
    fn on_milestone(&mut self, _update: &ProgressUpdate<'_>) {}
}

/// Observer that discards all telemetry
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_word(&mut self, _update: &ProgressUpdate<'_>) {}
}

/// Format a duration as `HH:MM:SS`, hours left unbounded
pub fn format_hms(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
