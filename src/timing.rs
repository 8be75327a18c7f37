//! Wall-clock timing harness
//!
//! One untimed warm-up invocation, then N timed trials accumulating elapsed
//! wall-clock time, reported as the arithmetic mean in milliseconds. Nothing
//! fancier: the harness deliberately stops at the mean.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Result of timing one implementation variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingResult {
    /// Variant label, e.g. `crc16/native`
    pub label: String,
    /// Arithmetic mean wall-clock time per trial, in milliseconds
    pub mean_millis: f64,
}

/// Time a closure over repeated trials.
///
/// Runs `op` once untimed to exclude first-call overhead (allocation,
/// dispatch setup), then `trials` times inside one timed region. A zero
/// trial count is treated as one.
///
/// # Examples
///
/// ```
/// use medir::timing::measure;
///
/// let result = measure("noop", 10, || {});
/// assert_eq!(result.label, "noop");
/// assert!(result.mean_millis >= 0.0);
/// ```
pub fn measure<F>(label: &str, trials: usize, mut op: F) -> TimingResult
where
    F: FnMut(),
{
    let trials = trials.max(1);

    // Warm-up, untimed
    op();

    let start = Instant::now();
    for _ in 0..trials {
        op();
    }
    let elapsed = start.elapsed();

    TimingResult {
        label: label.to_string(),
        mean_millis: elapsed.as_nanos() as f64 / 1_000_000.0 / trials as f64,
    }
}
