//! Full linear convolution of discrete-time sequences.

/// Computes the full linear convolution of two sequences.
///
/// Standard sliding-sum semantics: `y[i] = Σ_k x[k] · h[i-k]` over all valid
/// `k`. The output has length `x.len() + h.len() - 1` for non-empty inputs;
/// if either input is empty the result is empty. There is no truncation and
/// no circular mode, and the inputs are not modified.
///
/// # Arguments
///
/// * `x` - First input sequence
/// * `h` - Second input sequence
///
/// # Examples
///
/// ```
/// use convolvulus::convolve;
///
/// let y = convolve(&[1.0, 2.0], &[1.0, 1.0, 1.0]);
/// assert_eq!(y, vec![1.0, 3.0, 3.0, 2.0]);
/// ```
pub fn convolve(x: &[f64], h: &[f64]) -> Vec<f64> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }
    let mut y = vec![0.0; x.len() + h.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (j, &hj) in h.iter().enumerate() {
            y[i + j] += xi * hj;
        }
    }
    y
}
