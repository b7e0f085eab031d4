//! Convolvulus - discrete-time convolution visualization for Rust
//!
//! This library provides the building blocks for a classic signals-and-systems
//! demonstration: the convolution `y[n] = x[n] * h[n]` of an exponentially
//! decaying input `x[n] = a^n · u[n]` with a rectangular pulse
//! `h[n] = u[n] - u[n-N]`, plus a parameter sweep that animates the decay
//! factor `a` from 0 toward 1.

pub mod convolution;
pub mod sequences;
#[cfg(feature = "snapshot")]
pub mod snapshot;
pub mod sweep;

// Re-export commonly used types at the crate root
pub use convolution::convolve;
pub use sequences::{ExponentialDecay, RectPulse, Sequence, generate_h, generate_x};
#[cfg(feature = "snapshot")]
pub use snapshot::{Snapshot, SnapshotError};
pub use sweep::{DecaySweep, SweepConfig, SweepFrame};
