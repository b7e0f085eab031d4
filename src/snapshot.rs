//! Persisted snapshot of one convolution run.
//!
//! A snapshot is a serialized mapping with keys `x_n`, `h_n` and `y_n`. The
//! on-disk format (JSON) is an implementation detail, not a stable wire
//! format; the only guarantee is that a saved snapshot reloads element-wise
//! equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The three arrays of one convolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Input signal x[n]
    pub x_n: Vec<f64>,
    /// Impulse response h[n]
    pub h_n: Vec<f64>,
    /// Convolution output y[n]
    pub y_n: Vec<f64>,
}

impl Snapshot {
    /// Writes the snapshot to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination file path, overwritten if it exists
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Reads a snapshot back from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Failure modes of snapshot I/O. No retry or recovery is attempted.
#[derive(Debug)]
pub enum SnapshotError {
    /// The file could not be opened, created or fully read/written
    Io(std::io::Error),
    /// The file contents were not a valid snapshot
    Format(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "snapshot I/O failed: {err}"),
            SnapshotError::Format(err) => write!(f, "snapshot format invalid: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(err) => Some(err),
            SnapshotError::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Format(err)
    }
}
