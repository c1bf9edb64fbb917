//! Pairdist Kernel - pairwise distance benchmarks for atom boxes
//!
//! Three ways to get distances between atoms in a cubic box:
//! - Brute force over all pairs (O(N²))
//! - The same brute force split into contiguous chunks on a worker pool
//! - K-d tree query restricted to pairs within a cutoff radius

pub mod brute;
pub mod config;
pub mod cutoff;
pub mod error;
pub mod parallel;
pub mod points;
pub mod report;

#[cfg(feature = "python")]
mod bindings;

pub use brute::{pair_count, pairwise_distances, pairwise_distances_range};
pub use config::BenchConfig;
pub use cutoff::{cutoff_distances, cutoff_pairs, PairDistance};
pub use error::{DistanceError, Result};
pub use parallel::{chunk_ranges, parallel_wrapper};
pub use points::{distance, generate_positions, Point3, PointSet};
pub use report::{render_table, run_benchmark, BenchReport, Timings};
