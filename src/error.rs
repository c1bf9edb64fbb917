//! Error types for the distance kernels.

use thiserror::Error;

/// Errors raised by the distance kernels and the benchmark runner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    /// A configuration value was rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Outer-loop range is not a sub-range of the point set.
    #[error("range {start}..{end} out of bounds for {len} points")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// Cutoff radius must be finite and non-negative.
    #[error("invalid cutoff radius: {0}")]
    InvalidCutoff(f64),

    /// A position has a NaN or infinite coordinate.
    #[error("position {index} has a non-finite coordinate")]
    NonFinitePosition { index: usize },

    /// The bounded worker pool could not be created.
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

impl DistanceError {
    pub fn config(message: impl Into<String>) -> Self {
        DistanceError::InvalidConfig(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DistanceError>;
