//! Atom positions in a cubic box.
//!
//! Positions are drawn uniformly from [0, box_size)^3 with a seeded
//! ChaCha8 stream, so a given (num_atoms, box_size, seed) always yields
//! the same coordinates. The SHA256 fingerprint makes that checkable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

pub type Point3 = [f64; 3];

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Generate `num_atoms` uniform positions in [0, box_size)^3.
pub fn generate_positions(num_atoms: usize, box_size: f64, seed: u64) -> Vec<Point3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..num_atoms)
        .map(|_| {
            [
                rng.gen::<f64>() * box_size,
                rng.gen::<f64>() * box_size,
                rng.gen::<f64>() * box_size,
            ]
        })
        .collect()
}

/// Hex SHA256 over the little-endian bytes of every coordinate, in order.
pub fn positions_fingerprint(positions: &[Point3]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((positions.len() as u64).to_le_bytes());
    for p in positions {
        for c in p {
            hasher.update(c.to_le_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

/// Immutable point set shared read-only by every kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    positions: Vec<Point3>,
}

impl PointSet {
    pub fn generate(num_atoms: usize, box_size: f64, seed: u64) -> Self {
        Self::from_positions(generate_positions(num_atoms, box_size, seed))
    }

    pub fn from_positions(positions: Vec<Point3>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn fingerprint(&self) -> String {
        positions_fingerprint(&self.positions)
    }
}
