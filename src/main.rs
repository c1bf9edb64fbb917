//! Benchmark brute-force, parallel, and cutoff pairwise distances.
//!
//! Run with: cargo run --release --bin pairdist-bench
//!
//! With no flags the historical configuration is used (1000 atoms, box 10.0,
//! cutoff 1.5, 4 workers, seed 42). Set RUST_LOG=debug for per-chunk logs.

use clap::Parser;
use pairdist_kernel::config::{
    BenchConfig, DEFAULT_BOX_SIZE, DEFAULT_CUTOFF_RADIUS, DEFAULT_NUM_ATOMS, DEFAULT_NUM_WORKERS,
    DEFAULT_SEED,
};
use pairdist_kernel::{render_table, run_benchmark};

#[derive(Parser)]
#[command(name = "pairdist-bench")]
#[command(about = "Time pairwise distance strategies on random atoms in a box")]
struct Args {
    /// Number of atoms
    #[arg(long, default_value_t = DEFAULT_NUM_ATOMS)]
    atoms: usize,

    /// Edge length of the cubic box
    #[arg(long, default_value_t = DEFAULT_BOX_SIZE)]
    box_size: f64,

    /// Cutoff radius for the k-d tree path
    #[arg(long, default_value_t = DEFAULT_CUTOFF_RADIUS)]
    cutoff: f64,

    /// Worker threads for the parallel brute force
    #[arg(short, long, default_value_t = DEFAULT_NUM_WORKERS)]
    workers: usize,

    /// Random seed
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        BenchConfig {
            num_atoms: args.atoms,
            box_size: args.box_size,
            cutoff_radius: args.cutoff,
            num_workers: args.workers,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BenchConfig::from(Args::parse());
    let report = run_benchmark(&config)?;
    log::info!(
        "{} of {} pairs within cutoff {:.3}",
        report.cutoff_pairs,
        report.total_pairs,
        report.cutoff_radius
    );

    println!("{}", render_table(&report.timings));
    Ok(())
}
