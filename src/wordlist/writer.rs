//! Streaming wordlist generation

use std::io::Write;
use std::time::Instant;

use chrono::Utc;

use super::generator::words;
use super::progress::{ProgressObserver, ProgressUpdate};
use crate::error::{Result, WordforgeError};
use crate::estimate::estimate;
use crate::types::{GenerationReport, GenerationSpec};

/// How often milestone telemetry fires, in words
pub const MILESTONE_INTERVAL: u64 = 1000;

/// Write every candidate word of `spec` to `sink`, one per line.
///
/// The sink's lifecycle belongs to the caller: open (truncating) before the
/// call, close after, on every exit path. A failed write aborts the run at
/// once and whatever prefix reached the sink stays there.
///
/// The total is recomputed here and must agree with the figure the operator
/// approved; it is the fixed denominator for all progress reporting.
pub fn generate<W, O>(
    spec: &GenerationSpec,
    sink: &mut W,
    observer: &mut O,
) -> Result<GenerationReport>
where
    W: Write,
    O: ProgressObserver + ?Sized,
{
    spec.validate()?;
    let total = estimate(spec)?.total_count;

    tracing::debug!(
        min_length = spec.min_length,
        max_length = spec.max_length,
        charset_size = spec.charset.len(),
        total = %total,
        "Starting wordlist generation"
    );

    let started_at = Utc::now();
    let start = Instant::now();
    let mut words_generated: u64 = 0;

    for word in words(spec) {
        sink.write_all(word.as_bytes())
            .and_then(|_| sink.write_all(b"\n"))
            .map_err(|e| WordforgeError::sink_write(e.to_string(), None))?;
        words_generated += 1;

        if spec.verbosity >= 1 {
            let update = ProgressUpdate::new(words_generated, &total, start.elapsed());
            observer.on_word(&update);
            if spec.verbosity >= 3 && words_generated % MILESTONE_INTERVAL == 0 {
                observer.on_milestone(&update);
            }
        }
    }

    sink.flush()
        .map_err(|e| WordforgeError::sink_write(e.to_string(), None))?;

    let elapsed = start.elapsed();

    tracing::info!(
        words = words_generated,
        elapsed_secs = elapsed.as_secs(),
        "Wordlist generation complete"
    );

    Ok(GenerationReport {
        words_generated,
        elapsed,
        started_at,
        finished_at: Utc::now(),
    })
}
