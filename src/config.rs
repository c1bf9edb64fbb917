//! Benchmark configuration.
//!
//! Defaults reproduce the historical run: 1000 atoms in a 10.0 box,
//! cutoff 1.5, 4 workers, seed 42.

use crate::error::{DistanceError, Result};

pub const DEFAULT_NUM_ATOMS: usize = 1000;
pub const DEFAULT_BOX_SIZE: f64 = 10.0;
pub const DEFAULT_CUTOFF_RADIUS: f64 = 1.5;
pub const DEFAULT_NUM_WORKERS: usize = 4;
pub const DEFAULT_SEED: u64 = 42;

/// Parameters for one benchmark run. Passed explicitly to every stage.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub num_atoms: usize,
    pub box_size: f64,
    pub cutoff_radius: f64,
    pub num_workers: usize,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_atoms: DEFAULT_NUM_ATOMS,
            box_size: DEFAULT_BOX_SIZE,
            cutoff_radius: DEFAULT_CUTOFF_RADIUS,
            num_workers: DEFAULT_NUM_WORKERS,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Reject values that would make a stage fail halfway through a run.
    pub fn validate(&self) -> Result<()> {
        if !self.box_size.is_finite() || self.box_size <= 0.0 {
            return Err(DistanceError::config(format!(
                "box_size must be positive and finite, got {}",
                self.box_size
            )));
        }
        if !self.cutoff_radius.is_finite() || self.cutoff_radius < 0.0 {
            return Err(DistanceError::config(format!(
                "cutoff_radius must be non-negative and finite, got {}",
                self.cutoff_radius
            )));
        }
        if self.num_workers == 0 {
            return Err(DistanceError::config("num_workers must be at least 1"));
        }
        Ok(())
    }
}
