//! Exponentially decaying input sequence.

use super::Sequence;

/// The input signal `x[n] = a^n · u[n]`.
///
/// Samples are produced by repeated multiplication with the decay factor, so
/// `x[0]` is always exactly 1.0. The decay factor is intended to lie in
/// `[0, 1)`; no bounds are enforced. `a = 1` degenerates to a constant
/// sequence of ones, and `a > 1` produces a growing sequence.
///
/// # Examples
///
/// ```
/// use convolvulus::{ExponentialDecay, Sequence};
///
/// let mut x = ExponentialDecay::new(0.5);
/// assert_eq!(x.next_sample(), 1.0);
/// assert_eq!(x.next_sample(), 0.5);
/// assert_eq!(x.next_sample(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    decay: f64,
    value: f64,
}

impl ExponentialDecay {
    /// Creates a new decaying sequence with the given decay factor.
    pub fn new(decay: f64) -> Self {
        Self { decay, value: 1.0 }
    }

    /// Gets the decay factor.
    pub fn decay(&self) -> f64 {
        self.decay
    }
}

impl Sequence for ExponentialDecay {
    fn next_sample(&mut self) -> f64 {
        let sample = self.value;
        self.value *= self.decay;
        sample
    }

    fn reset(&mut self) {
        self.value = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_sequence_creation() {
        let x = ExponentialDecay::new(0.7);
        assert_eq!(x.decay(), 0.7);
    }

    #[test]
    fn test_first_sample_is_one() {
        let mut x = ExponentialDecay::new(0.3);
        assert_eq!(x.next_sample(), 1.0);
    }

    #[test]
    fn test_samples_match_powers() {
        let mut x = ExponentialDecay::new(0.7);
        for n in 0..20 {
            let sample = x.next_sample();
            assert!((sample - 0.7_f64.powi(n)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reset() {
        let mut x = ExponentialDecay::new(0.5);
        for _ in 0..10 {
            x.next_sample();
        }
        x.reset();
        assert_eq!(x.next_sample(), 1.0);
    }

    #[test]
    fn test_zero_decay() {
        let mut x = ExponentialDecay::new(0.0);
        assert_eq!(x.next_sample(), 1.0);
        assert_eq!(x.next_sample(), 0.0);
        assert_eq!(x.next_sample(), 0.0);
    }

    #[test]
    fn test_unit_decay_is_constant() {
        let mut x = ExponentialDecay::new(1.0);
        for _ in 0..100 {
            assert_eq!(x.next_sample(), 1.0);
        }
    }

    #[test]
    fn test_decay_above_one_grows() {
        // Out-of-range decay factors are passed through unchecked
        let mut x = ExponentialDecay::new(2.0);
        x.next_sample();
        assert_eq!(x.next_sample(), 2.0);
        assert_eq!(x.next_sample(), 4.0);
    }

    #[test]
    fn test_process_buffer() {
        let mut x = ExponentialDecay::new(0.5);
        let mut buffer = [0.0; 4];
        x.process(&mut buffer);
        assert_eq!(buffer, [1.0, 0.5, 0.25, 0.125]);
    }
}
