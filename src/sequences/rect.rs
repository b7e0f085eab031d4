//! Rectangular pulse sequence.

use super::Sequence;

/// The impulse response `h[n] = u[n] - u[n-N]`.
///
/// Produces exactly 1.0 for `0 <= n < width` and 0.0 for every later index.
/// The width is not validated; a width of 0 yields the all-zero sequence.
///
/// # Examples
///
/// ```
/// use convolvulus::{RectPulse, Sequence};
///
/// let mut h = RectPulse::new(2);
/// assert_eq!(h.next_sample(), 1.0);
/// assert_eq!(h.next_sample(), 1.0);
/// assert_eq!(h.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectPulse {
    width: usize,
    index: usize,
}

impl RectPulse {
    /// Creates a new rectangular pulse of the given width.
    pub fn new(width: usize) -> Self {
        Self { width, index: 0 }
    }

    /// Gets the pulse width.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Sequence for RectPulse {
    fn next_sample(&mut self) -> f64 {
        let sample = if self.index < self.width { 1.0 } else { 0.0 };
        self.index += 1;
        sample
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_creation() {
        let h = RectPulse::new(10);
        assert_eq!(h.width(), 10);
    }

    #[test]
    fn test_exact_ones_then_zeros() {
        let mut h = RectPulse::new(10);
        let window = h.take_samples(30);
        assert_eq!(window.iter().filter(|&&v| v == 1.0).count(), 10);
        assert!(window[..10].iter().all(|&v| v == 1.0));
        assert!(window[10..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_reset() {
        let mut h = RectPulse::new(3);
        for _ in 0..5 {
            h.next_sample();
        }
        h.reset();
        assert_eq!(h.next_sample(), 1.0);
    }

    #[test]
    fn test_zero_width() {
        let mut h = RectPulse::new(0);
        assert!(h.take_samples(5).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_width_one_is_unit_impulse() {
        let mut h = RectPulse::new(1);
        assert_eq!(h.take_samples(4), vec![1.0, 0.0, 0.0, 0.0]);
    }
}
