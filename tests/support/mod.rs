#![allow(dead_code)]

use pairdist_kernel::{generate_positions, Point3};

/// Seeded uniform positions in a box.
pub fn random_box_points(n: usize, box_size: f64, seed: u64) -> Vec<Point3> {
    generate_positions(n, box_size, seed)
}

/// Points on a regular cubic lattice with the given spacing.
pub fn lattice_points(per_side: usize, spacing: f64) -> Vec<Point3> {
    let mut points = Vec::with_capacity(per_side.pow(3));
    for x in 0..per_side {
        for y in 0..per_side {
            for z in 0..per_side {
                points.push([x as f64 * spacing, y as f64 * spacing, z as f64 * spacing]);
            }
        }
    }
    points
}

pub fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// `n` copies of the same position.
pub fn coincident_points(n: usize, position: [f64; 3]) -> Vec<Point3> {
    vec![position; n]
}

/// Seeded points that all share the same x coordinate.
pub fn planar_points(n: usize, x: f64, box_size: f64, seed: u64) -> Vec<Point3> {
    generate_positions(n, box_size, seed)
        .into_iter()
        .map(|p| [x, p[1], p[2]])
        .collect()
}
