//! Core trait definition for discrete-time sequences.

/// Common interface for discrete-time sequences defined over n = 0, 1, 2, ...
///
/// This trait defines the core functionality for anything that can generate
/// sample values indexed by a non-negative integer: signal generators, pulse
/// shapes, and so on. Sequences are conceptually infinite; callers materialize
/// a finite window with `take_samples`.
///
/// The trait provides three fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
/// - Rewinding to n = 0 via `reset()`
pub trait Sequence {
    /// Generates the sample at the current index and advances to the next.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch generation.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Materializes a finite window of `len` samples starting at the current
    /// index.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of samples to generate
    ///
    /// # Returns
    ///
    /// A freshly allocated vector of `len` samples
    fn take_samples(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }

    /// Resets the sequence to its initial state (n = 0).
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp(f64);

    impl Sequence for Ramp {
        fn next_sample(&mut self) -> f64 {
            let sample = self.0;
            self.0 += 1.0;
            sample
        }

        fn reset(&mut self) {
            self.0 = 0.0;
        }
    }

    #[test]
    fn test_process_fills_buffer() {
        let mut ramp = Ramp(0.0);
        let mut buffer = [0.0; 4];
        ramp.process(&mut buffer);
        assert_eq!(buffer, [0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_take_samples_continues_from_current_index() {
        let mut ramp = Ramp(0.0);
        let first = ramp.take_samples(3);
        let second = ramp.take_samples(2);
        assert_eq!(first, vec![0.0, 1.0, 2.0]);
        assert_eq!(second, vec![3.0, 4.0]);
    }

    #[test]
    fn test_take_samples_empty_window() {
        let mut ramp = Ramp(0.0);
        assert!(ramp.take_samples(0).is_empty());
    }
}
