//! Cutoff-restricted distances via k-d tree (O(N log N) + output)

use kiddo::{ImmutableKdTree, SquaredEuclidean};

use crate::error::{DistanceError, Result};
use crate::points::{distance, Point3};

// Relative slack on the squared probe radius. Candidates are re-checked
// exactly, so the tree only has to over-report.
const PROBE_SLACK: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance {
    pub source_idx: usize,
    pub target_idx: usize,
    pub distance: f64,
}

fn build_kdtree(entries: &[Point3]) -> ImmutableKdTree<f64, 3> {
    ImmutableKdTree::new_from_slice(entries)
}

/// Smallest f64 strictly greater than a finite `x`.
fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        f64::from_bits(x.to_bits() - 1)
    }
}

/// Copy of `points` where no two entries share a value on any axis.
///
/// Along each axis, values are visited in sorted order and any value not
/// strictly above its predecessor is bumped one ulp past it. The k-d tree
/// overflows a leaf when a bucket's worth of points share a split value, so
/// the tree is built over these entries. Returns the entries and the largest
/// bump applied on any axis.
fn separate_ties(points: &[Point3]) -> (Vec<Point3>, f64) {
    let mut entries = points.to_vec();
    let mut max_shift = 0.0f64;
    let mut order: Vec<usize> = (0..points.len()).collect();

    for axis in 0..3 {
        order.sort_unstable_by(|&a, &b| points[a][axis].total_cmp(&points[b][axis]));
        let mut prev: Option<f64> = None;
        for &i in &order {
            let original = points[i][axis];
            let value = match prev {
                Some(p) if original <= p => next_up(p),
                _ => original,
            };
            entries[i][axis] = value;
            max_shift = max_shift.max(value - original);
            prev = Some(value);
        }
    }
    (entries, max_shift)
}

/// All pairs (i, j), i < j, with `distance <= cutoff_radius`, each reported once.
///
/// Distances come from [`distance`] on the original positions, so they match
/// the brute-force values exactly.
pub fn cutoff_pairs(points: &[Point3], cutoff_radius: f64) -> Result<Vec<PairDistance>> {
    if !cutoff_radius.is_finite() || cutoff_radius < 0.0 {
        return Err(DistanceError::InvalidCutoff(cutoff_radius));
    }
    if let Some(index) = points.iter().position(|p| p.iter().any(|c| !c.is_finite())) {
        return Err(DistanceError::NonFinitePosition { index });
    }
    if points.len() < 2 {
        return Ok(vec![]);
    }

    let (entries, max_shift) = separate_ties(points);
    if max_shift > 0.0 {
        log::debug!("separated repeated coordinates, largest shift {:e}", max_shift);
    }
    let tree = build_kdtree(&entries);

    // Each entry moved at most sqrt(3) * max_shift from its point.
    let reach = cutoff_radius + 2.0 * 3f64.sqrt() * max_shift;
    let probe_sq = (reach * reach).max(f64::MIN_POSITIVE) * (1.0 + PROBE_SLACK);

    let mut pairs = Vec::new();
    for (i, query) in entries.iter().enumerate() {
        for neighbour in tree.within_unsorted::<SquaredEuclidean>(query, probe_sq) {
            let j = neighbour.item as usize;
            if j <= i {
                continue;
            }
            let d = distance(&points[i], &points[j]);
            if d <= cutoff_radius {
                pairs.push(PairDistance { source_idx: i, target_idx: j, distance: d });
            }
        }
    }
    Ok(pairs)
}

/// Distances of every pair within `cutoff_radius`, in no particular order.
pub fn cutoff_distances(points: &[Point3], cutoff_radius: f64) -> Result<Vec<f64>> {
    Ok(cutoff_pairs(points, cutoff_radius)?
        .into_iter()
        .map(|p| p.distance)
        .collect())
}
