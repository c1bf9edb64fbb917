//! Timed benchmark run and the fixed-width results table.

use std::time::{Duration, Instant};

use crate::brute::{pair_count, pairwise_distances, pairwise_distances_range};
use crate::config::BenchConfig;
use crate::cutoff::cutoff_distances;
use crate::error::Result;
use crate::parallel::parallel_wrapper;
use crate::points::PointSet;

pub const LABEL_SERIAL: &str = "Without cutoff, without parallel";
pub const LABEL_PARALLEL: &str = "Without cutoff, with parallel";
pub const LABEL_CUTOFF: &str = "With cutoff, without parallel";
pub const LABEL_CUTOFF_PARALLEL: &str = "With cutoff, with parallel";

/// Ratio of a baseline duration to a comparison duration.
///
/// Plain f64 division: a zero comparison time gives `inf` (or `NaN` when
/// both are zero) rather than a panic.
pub fn speedup(baseline: Duration, comparison: Duration) -> f64 {
    baseline.as_secs_f64() / comparison.as_secs_f64()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timings {
    pub without_cutoff: Duration,
    pub without_cutoff_parallel: Duration,
    pub with_cutoff: Duration,
    /// No parallel cutoff path exists; this mirrors `with_cutoff`.
    pub with_cutoff_parallel: Duration,
}

impl Timings {
    pub fn speedup_without_cutoff(&self) -> f64 {
        speedup(self.without_cutoff, self.without_cutoff_parallel)
    }

    /// Parallel brute-force time over cutoff time. The baseline is the
    /// parallel run, not the serial one; kept so numbers stay comparable
    /// with earlier reports.
    pub fn speedup_with_cutoff(&self) -> f64 {
        speedup(self.without_cutoff_parallel, self.with_cutoff)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub num_atoms: usize,
    pub num_workers: usize,
    pub cutoff_radius: f64,
    pub fingerprint: String,
    pub total_pairs: usize,
    pub parallel_pairs: usize,
    pub cutoff_pairs: usize,
    pub timings: Timings,
}

fn timed<T>(f: impl FnOnce() -> Result<T>) -> Result<(T, Duration)> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}

/// Run brute force, parallel brute force, and cutoff, in that order.
pub fn run_benchmark(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let points = PointSet::generate(config.num_atoms, config.box_size, config.seed);
    let fingerprint = points.fingerprint();
    log::info!(
        "Generated {} atoms in a {:.3} box (seed {}, fingerprint {})",
        points.len(),
        config.box_size,
        config.seed,
        &fingerprint[..16]
    );
    let positions = points.positions();

    let (serial, without_cutoff) = timed(|| Ok(pairwise_distances(positions)))?;
    log::info!("Brute force: {} distances in {:.6}s", serial.len(), without_cutoff.as_secs_f64());

    let (parallel, without_cutoff_parallel) = timed(|| {
        parallel_wrapper(pairwise_distances_range, positions, config.num_workers)
    })?;
    log::info!(
        "Parallel brute force ({} workers): {} distances in {:.6}s",
        config.num_workers,
        parallel.len(),
        without_cutoff_parallel.as_secs_f64()
    );
    if parallel.len() != serial.len() {
        log::warn!(
            "Parallel run produced {} distances, serial produced {}",
            parallel.len(),
            serial.len()
        );
    }

    let (within, with_cutoff) = timed(|| cutoff_distances(positions, config.cutoff_radius))?;
    log::info!(
        "Cutoff {:.3}: {} distances in {:.6}s",
        config.cutoff_radius,
        within.len(),
        with_cutoff.as_secs_f64()
    );

    Ok(BenchReport {
        num_atoms: config.num_atoms,
        num_workers: config.num_workers,
        cutoff_radius: config.cutoff_radius,
        fingerprint,
        total_pairs: pair_count(config.num_atoms),
        parallel_pairs: parallel.len(),
        cutoff_pairs: within.len(),
        timings: Timings {
            without_cutoff,
            without_cutoff_parallel,
            with_cutoff,
            with_cutoff_parallel: with_cutoff,
        },
    })
}

fn row(label: &str, time: Duration, ratio: Option<f64>) -> String {
    let line = match ratio {
        Some(s) => format!("{:<35}{:<20.6} {:<20.2}", label, time.as_secs_f64(), s),
        None => format!("{:<35}{:<20.6}", label, time.as_secs_f64()),
    };
    line.trim_end().to_string()
}

/// Header, separator, and one row per timed path.
pub fn render_table(timings: &Timings) -> String {
    let lines = [
        format!("{:<30} {:<20} {:<20}", "Method", "Time (seconds)", "Speedup")
            .trim_end()
            .to_string(),
        "=".repeat(70),
        row(LABEL_SERIAL, timings.without_cutoff, None),
        row(
            LABEL_PARALLEL,
            timings.without_cutoff_parallel,
            Some(timings.speedup_without_cutoff()),
        ),
        row(LABEL_CUTOFF, timings.with_cutoff, None),
        row(
            LABEL_CUTOFF_PARALLEL,
            timings.with_cutoff_parallel,
            Some(timings.speedup_with_cutoff()),
        ),
    ];
    lines.join("\n")
}
