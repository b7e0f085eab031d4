//! Discrete-time sequence generators.
//!
//! This module provides the core sequence abstractions:
//! - `Sequence` trait for anything that produces samples over n = 0, 1, 2, ...
//! - `ExponentialDecay` for the input signal x[n] = a^n · u[n]
//! - `RectPulse` for the impulse response h[n] = u[n] - u[n-N]
//! - `generate_x` / `generate_h` convenience functions for one-shot windows

mod exponential;
mod rect;
mod traits;

pub use exponential::ExponentialDecay;
pub use rect::RectPulse;
pub use traits::Sequence;

/// Materializes a window of the decaying input `x[n] = a^n` for `0 <= n < len`.
///
/// The decay factor is intended to lie in `[0, 1)`; no bounds are enforced, so
/// `decay = 1` yields a constant sequence and `decay > 1` silently grows.
///
/// # Examples
///
/// ```
/// use convolvulus::generate_x;
///
/// let x = generate_x(0.5, 4);
/// assert_eq!(x, vec![1.0, 0.5, 0.25, 0.125]);
/// ```
pub fn generate_x(decay: f64, len: usize) -> Vec<f64> {
    ExponentialDecay::new(decay).take_samples(len)
}

/// Materializes a window of the rectangular pulse `h[n] = u[n] - u[n-width]`
/// for `0 <= n < len`.
///
/// # Examples
///
/// ```
/// use convolvulus::generate_h;
///
/// let h = generate_h(5, 2);
/// assert_eq!(h, vec![1.0, 1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn generate_h(len: usize, width: usize) -> Vec<f64> {
    RectPulse::new(width).take_samples(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_x_window() {
        let x = generate_x(0.7, 10);
        assert_eq!(x.len(), 10);
        assert_eq!(x[0], 1.0);
        assert_eq!(x[1], 0.7);
    }

    #[test]
    fn test_generate_h_window() {
        let h = generate_h(30, 10);
        assert_eq!(h.len(), 30);
        assert!(h[..10].iter().all(|&v| v == 1.0));
        assert!(h[10..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_generate_h_width_exceeds_window() {
        let h = generate_h(5, 10);
        assert!(h.iter().all(|&v| v == 1.0));
    }
}
