//! Candidate count and output size estimation
//!
//! Runs before generation so the operator can approve (or bail out of) a
//! potentially enormous write. Pure: a function of the spec only.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::Result;
use crate::types::GenerationSpec;

/// Pre-generation estimate of the output volume
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Exact number of words the run will produce
    pub total_count: BigUint,
    /// Rough output size in bytes, assuming the average word length.
    /// Ignores the per-line newline, so treat it as an approximation.
    pub estimated_size_bytes: f64,
}

/// Compute the exact candidate count and a rough byte estimate.
///
/// The count is `sum(|charset|^len)` over the length range. Realistic
/// charset/length combinations overflow `u64` (the default 95-symbol set
/// already does at length 10), hence the `BigUint`.
pub fn estimate(spec: &GenerationSpec) -> Result<Estimate> {
    spec.validate()?;

    let base = BigUint::from(spec.charset.len());
    let mut term = BigUint::one();
    for _ in 0..spec.min_length {
        term *= &base;
    }

    let mut total_count = BigUint::zero();
    for _ in spec.min_length..=spec.max_length {
        total_count += &term;
        term *= &base;
    }

    let avg_word_length = (spec.min_length + spec.max_length) as f64 / 2.0;
    let estimated_size_bytes =
        total_count.to_f64().unwrap_or(f64::INFINITY) * avg_word_length;

    Ok(Estimate {
        total_count,
        estimated_size_bytes,
    })
}
