//! Numerically stable 1-D softmax
//!
//! The input maximum is subtracted before exponentiating. This is a
//! correctness requirement, not an optimization: without it, inputs above
//! ~709 overflow `f64::exp` to infinity.

/// Compute the softmax of a vector: `out[i] = exp(x[i] - max) / Σ exp(x[j] - max)`.
///
/// Output values are non-negative and sum to 1.0 within floating-point
/// tolerance. An empty input yields an empty output.
///
/// # Examples
///
/// ```
/// use medir::kernels::softmax;
///
/// let probs = softmax(&[1.0, 2.0, 3.0]);
/// let sum: f64 = probs.iter().sum();
/// assert!((sum - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn softmax(x: &[f64]) -> Vec<f64> {
    if x.is_empty() {
        return Vec::new();
    }

    // Max subtraction keeps every exponent <= 0
    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let exp_vals: Vec<f64> = x.iter().map(|&v| (v - max).exp()).collect();
    let sum: f64 = exp_vals.iter().sum();

    exp_vals.into_iter().map(|v| v / sum).collect()
}
