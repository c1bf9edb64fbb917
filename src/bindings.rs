//! Python Bindings for Pairdist Kernel

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::DistanceError;
use crate::points::Point3;

impl From<DistanceError> for PyErr {
    fn from(err: DistanceError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_points(positions: Vec<Vec<f64>>) -> PyResult<Vec<Point3>> {
    positions
        .into_iter()
        .enumerate()
        .map(|(i, p)| match p.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(PyValueError::new_err(format!(
                "position {} has {} coordinates, expected 3",
                i,
                p.len()
            ))),
        })
        .collect()
}

// ============================================================================
// BRUTE FORCE
// ============================================================================

/// All-pairs distances (O(N²))
#[pyfunction]
fn pairwise_distances(positions: Vec<Vec<f64>>) -> PyResult<Vec<f64>> {
    let points = to_points(positions)?;
    Ok(crate::brute::pairwise_distances(&points))
}

/// All-pairs distances split across `num_workers` threads
#[pyfunction]
#[pyo3(signature = (positions, num_workers = 4))]
fn pairwise_distances_parallel(positions: Vec<Vec<f64>>, num_workers: usize) -> PyResult<Vec<f64>> {
    let points = to_points(positions)?;
    Ok(crate::parallel::parallel_wrapper(
        crate::brute::pairwise_distances_range,
        &points,
        num_workers,
    )?)
}

// ============================================================================
// CUTOFF: k-d tree
// ============================================================================

/// Distances of pairs within `cutoff_radius`
#[pyfunction]
fn cutoff_distances(positions: Vec<Vec<f64>>, cutoff_radius: f64) -> PyResult<Vec<f64>> {
    let points = to_points(positions)?;
    Ok(crate::cutoff::cutoff_distances(&points, cutoff_radius)?)
}

/// SHA256 fingerprint of the positions (hex)
#[pyfunction]
fn positions_fingerprint(positions: Vec<Vec<f64>>) -> PyResult<String> {
    let points = to_points(positions)?;
    Ok(crate::points::positions_fingerprint(&points))
}

// ============================================================================
// MODULE EXPORT
// ============================================================================

#[pymodule]
fn pairdist_kernel(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pairwise_distances, m)?)?;
    m.add_function(wrap_pyfunction!(pairwise_distances_parallel, m)?)?;
    m.add_function(wrap_pyfunction!(cutoff_distances, m)?)?;
    m.add_function(wrap_pyfunction!(positions_fingerprint, m)?)?;
    Ok(())
}
