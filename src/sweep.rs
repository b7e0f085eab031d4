//! Decay-factor sweep for the animated demo.
//!
//! The sweep produces one decay factor per animation frame, then regenerates
//! the signals and their convolution for each frame. The raw frame indices
//! are linearly spaced and mapped through `a = 1 - exp(-k·t)`, which slows
//! the early frames down and compresses the asymptotic approach toward
//! `a = 1` (which is approached but never reached).

use crate::convolution::convolve;
use crate::sequences::{generate_h, generate_x};

/// Iterator over the decay factors of a parameter sweep.
///
/// Yields `frame_count` monotonically increasing values of `a`, starting at
/// exactly 0 and staying strictly below 1. The raw inputs are `frame_count`
/// linearly spaced values over `[0, 1 + 1000/frame_count]`, each mapped
/// through `a = 1 - exp(-exp_factor · t)`. For small frame counts the raw
/// span is large enough that the map saturates in floating point, so the
/// result is capped just below 1.0 to keep the limit unreachable.
///
/// # Examples
///
/// ```
/// use convolvulus::DecaySweep;
///
/// let a_values: Vec<f64> = DecaySweep::new(180).collect();
/// assert_eq!(a_values.len(), 180);
/// assert_eq!(a_values[0], 0.0);
/// assert!(a_values[179] < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DecaySweep {
    frame_count: usize,
    step: f64,
    exp_factor: f64,
    frame: usize,
}

impl DecaySweep {
    /// Default exponential scaling factor of the sweep.
    pub const DEFAULT_EXP_FACTOR: f64 = 1.2;

    /// Creates a sweep over `frame_count` frames with the default exponential
    /// factor.
    pub fn new(frame_count: usize) -> Self {
        Self::with_exp_factor(frame_count, Self::DEFAULT_EXP_FACTOR)
    }

    /// Creates a sweep over `frame_count` frames with a custom exponential
    /// factor. Larger factors reach the flat part of the curve sooner.
    pub fn with_exp_factor(frame_count: usize, exp_factor: f64) -> Self {
        let span = 1.0 + 1000.0 / frame_count as f64;
        let step = if frame_count > 1 {
            span / (frame_count - 1) as f64
        } else {
            0.0
        };
        Self {
            frame_count,
            step,
            exp_factor,
            frame: 0,
        }
    }
}

impl Iterator for DecaySweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.frame == self.frame_count {
            return None;
        }
        let t = self.frame as f64 * self.step;
        self.frame += 1;
        // exp_m1 keeps the small-t values accurate; the cap keeps large-t
        // values strictly below 1 once the map saturates
        let a = -(-self.exp_factor * t).exp_m1();
        Some(a.min(1.0 - f64::EPSILON))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame_count - self.frame;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DecaySweep {}

/// One animation frame's worth of plot data, truncated to the display window.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrame {
    /// Decay factor used for this frame
    pub a: f64,
    /// Input signal x[n] over the display window
    pub x: Vec<f64>,
    /// Impulse response h[n] over the display window
    pub h: Vec<f64>,
    /// Convolution output y[n] over the display window
    pub y: Vec<f64>,
}

impl SweepFrame {
    /// Computes the signals and convolution for one frame.
    ///
    /// The input and impulse response are generated over the full simulation
    /// window of `sim_len` samples (approximating an infinite input), the
    /// full convolution is computed, and all three sequences are truncated to
    /// `display_len` samples for plotting.
    ///
    /// For indices inside the display window the truncated convolution is
    /// exact whenever `sim_len >= display_len`, since `y[i]` only depends on
    /// samples at indices `<= i`. The simulation window length is therefore a
    /// precision/performance trade-off only for callers who display past it.
    ///
    /// # Arguments
    ///
    /// * `a` - Decay factor of the input signal
    /// * `pulse_width` - Width N of the rectangular pulse
    /// * `sim_len` - Simulation window length
    /// * `display_len` - Number of samples kept for plotting
    pub fn compute(a: f64, pulse_width: usize, sim_len: usize, display_len: usize) -> Self {
        let x_full = generate_x(a, sim_len);
        let h_full = generate_h(sim_len, pulse_width);
        let y_full = convolve(&x_full, &h_full);

        let clip = |mut v: Vec<f64>| {
            v.truncate(display_len);
            v
        };

        Self {
            a,
            x: clip(x_full),
            h: clip(h_full),
            y: clip(y_full),
        }
    }
}

/// Script constants for the animated sweep demo.
///
/// The defaults reproduce the classic demonstration: a pulse of width 30,
/// 180 frames, a 1000-sample simulation window and a `3·N` display window.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Width N of the rectangular pulse
    pub pulse_width: usize,
    /// Total number of animation frames
    pub frame_count: usize,
    /// Exponential scaling factor of the decay-factor sweep
    pub exp_factor: f64,
    /// Simulation window length, approximating the infinite input
    pub sim_len: usize,
    /// Number of samples displayed per panel
    pub display_len: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        let pulse_width = 30;
        Self {
            pulse_width,
            frame_count: 180,
            exp_factor: DecaySweep::DEFAULT_EXP_FACTOR,
            sim_len: 1000,
            display_len: pulse_width * 3,
        }
    }
}

impl SweepConfig {
    /// Returns the decay factor for each frame of the sweep.
    pub fn decay_values(&self) -> DecaySweep {
        DecaySweep::with_exp_factor(self.frame_count, self.exp_factor)
    }

    /// Returns an iterator over the fully computed animation frames.
    pub fn frames(&self) -> impl Iterator<Item = SweepFrame> + '_ {
        self.decay_values()
            .map(|a| SweepFrame::compute(a, self.pulse_width, self.sim_len, self.display_len))
    }
}
