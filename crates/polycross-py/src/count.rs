//! Counting bindings.

use crate::common::{cfg_with_mode, map_geom_err, mode_from_py, polygon_from_py};
use polycross::{count_intersections, CountCfg};
use pyo3::prelude::*;

/// Count where the line `y = x` meets the polygon boundary.
#[pyfunction]
pub fn count_intersections_with_diag(vertices: Vec<(f64, f64)>) -> PyResult<usize> {
    polycross::count_intersections_with_diag(&vertices).map_err(map_geom_err)
}

/// Count under an explicit configuration.
#[pyfunction]
#[pyo3(signature = (
    vertices,
    mode = "single",
    diagonal = None,
    line = None,
    epsilon = 0.0,
    count_collinear_overlap_as_one = true,
    count_touches = false,
    validate_simple = false,
    parallel = false,
))]
#[allow(clippy::too_many_arguments)]
pub fn count_intersections_cfg(
    vertices: Vec<(f64, f64)>,
    mode: &str,
    diagonal: Option<(usize, usize)>,
    line: Option<((f64, f64), (f64, f64))>,
    epsilon: f64,
    count_collinear_overlap_as_one: bool,
    count_touches: bool,
    validate_simple: bool,
    parallel: bool,
) -> PyResult<usize> {
    let poly = polygon_from_py(vertices)?;
    let cfg = CountCfg {
        epsilon,
        count_collinear_overlap_as_one,
        count_touches,
        validate_simple,
        parallel,
        ..cfg_with_mode(mode_from_py(mode, diagonal, line)?)
    };
    count_intersections(&poly, &cfg).map_err(map_geom_err)
}

/// `(single, all, line)` counts with the default policy.
#[pyfunction]
pub fn count_all_modes(vertices: Vec<(f64, f64)>) -> PyResult<(usize, usize, usize)> {
    let poly = polygon_from_py(vertices)?;
    polycross::api::count_all_modes(&poly, &CountCfg::default()).map_err(map_geom_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(count_intersections_with_diag, m)?)?;
    m.add_function(wrap_pyfunction!(count_intersections_cfg, m)?)?;
    m.add_function(wrap_pyfunction!(count_all_modes, m)?)?;
    Ok(())
}
