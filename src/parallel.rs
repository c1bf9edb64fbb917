//! Chunked parallel dispatch over the outer index range.
//!
//! The range [0, N) is cut into `num_workers` contiguous chunks of
//! `N / num_workers` indices; the last chunk absorbs the remainder. Each
//! chunk runs on its own thread of a dedicated rayon pool and results are
//! concatenated in chunk order.

use std::ops::Range;

use rayon::prelude::*;

use crate::error::{DistanceError, Result};
use crate::points::Point3;

/// Contiguous outer-loop ranges, one per worker.
///
/// When `n < num_workers` the leading chunks are empty and the last one
/// covers everything.
pub fn chunk_ranges(n: usize, num_workers: usize) -> Vec<Range<usize>> {
    if num_workers == 0 {
        return vec![];
    }
    let chunk_size = n / num_workers;
    (0..num_workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == num_workers - 1 { n } else { (i + 1) * chunk_size };
            start..end
        })
        .collect()
}

/// Run `func(points, start, end)` once per chunk on a pool of `num_workers`
/// threads and concatenate the results in chunk order.
///
/// The first chunk error fails the whole call; partial results are dropped.
pub fn parallel_wrapper<F>(func: F, points: &[Point3], num_workers: usize) -> Result<Vec<f64>>
where
    F: Fn(&[Point3], usize, usize) -> Result<Vec<f64>> + Sync,
{
    if num_workers == 0 {
        return Err(DistanceError::config("num_workers must be at least 1"));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .thread_name(|i| format!("pairdist-worker-{}", i))
        .build()
        .map_err(|e| DistanceError::WorkerPool(e.to_string()))?;

    let ranges = chunk_ranges(points.len(), num_workers);
    let chunks: Vec<Vec<f64>> = pool.install(|| {
        ranges
            .par_iter()
            .enumerate()
            .map(|(chunk_idx, range)| {
                log::debug!("chunk {} covers {}..{}", chunk_idx, range.start, range.end);
                func(points, range.start, range.end)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let total = chunks.iter().map(Vec::len).sum();
    let mut distances = Vec::with_capacity(total);
    for chunk in chunks {
        distances.extend(chunk);
    }
    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute::{pair_count, pairwise_distances, pairwise_distances_range};
    use crate::points::generate_positions;

    #[test]
    fn test_chunk_ranges_cover() {
        let ranges = chunk_ranges(10, 4);
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..10]);

        let ranges = chunk_ranges(1000, 4);
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[3], 750..1000);
    }

    #[test]
    fn test_chunk_ranges_fewer_points_than_workers() {
        let ranges = chunk_ranges(3, 4);
        assert_eq!(ranges, vec![0..0, 0..0, 0..0, 0..3]);
    }

    #[test]
    fn test_chunk_ranges_single_worker() {
        assert_eq!(chunk_ranges(7, 1), vec![0..7]);
    }

    #[test]
    fn test_matches_serial_order() {
        // Contiguous chunks in order reproduce the serial enumeration exactly.
        let points = generate_positions(53, 10.0, 11);
        let serial = pairwise_distances(&points);
        for workers in 1..=6 {
            let parallel = parallel_wrapper(pairwise_distances_range, &points, workers).unwrap();
            assert_eq!(parallel.len(), pair_count(53));
            assert_eq!(parallel, serial, "workers = {}", workers);
        }
    }

    #[test]
    fn test_zero_workers_rejected() {
        let points = generate_positions(5, 10.0, 1);
        assert!(matches!(
            parallel_wrapper(pairwise_distances_range, &points, 0),
            Err(DistanceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_chunk_error_propagates() {
        let points = generate_positions(20, 10.0, 1);
        let failing = |pts: &[Point3], start: usize, end: usize| {
            if start >= 10 {
                Err(DistanceError::RangeOutOfBounds { start, end, len: pts.len() })
            } else {
                pairwise_distances_range(pts, start, end)
            }
        };
        let result = parallel_wrapper(failing, &points, 4);
        assert!(matches!(result, Err(DistanceError::RangeOutOfBounds { .. })));
    }

    #[test]
    fn test_empty_input() {
        assert!(parallel_wrapper(pairwise_distances_range, &[], 4).unwrap().is_empty());
        let one = [[1.0, 2.0, 3.0]];
        assert!(parallel_wrapper(pairwise_distances_range, &one, 4).unwrap().is_empty());
    }
}
