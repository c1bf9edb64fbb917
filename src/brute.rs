//! Brute-force pairwise distances (O(N²))

use crate::error::{DistanceError, Result};
use crate::points::{distance, Point3};

/// Number of unordered pairs among `n` points.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Number of pairs (i, j), j > i, for i in `start..end` over `n` points.
pub fn range_pair_count(n: usize, start: usize, end: usize) -> usize {
    (start..end.min(n)).map(|i| n - i - 1).sum()
}

/// Distances for every unordered pair (i, j), i < j.
pub fn pairwise_distances(points: &[Point3]) -> Vec<f64> {
    block_distances(points, 0, points.len())
}

/// Distances for pairs (i, j) with `start <= i < end` and `j > i` over the whole set.
///
/// This is the per-chunk routine handed to the parallel wrapper.
pub fn pairwise_distances_range(points: &[Point3], start: usize, end: usize) -> Result<Vec<f64>> {
    if start > end || end > points.len() {
        return Err(DistanceError::RangeOutOfBounds { start, end, len: points.len() });
    }
    Ok(block_distances(points, start, end))
}

fn block_distances(points: &[Point3], start: usize, end: usize) -> Vec<f64> {
    let mut distances = Vec::with_capacity(range_pair_count(points.len(), start, end));
    for i in start..end {
        let p1 = &points[i];
        distances.extend(points[i + 1..].iter().map(|p2| distance(p1, p2)));
    }
    distances
}
