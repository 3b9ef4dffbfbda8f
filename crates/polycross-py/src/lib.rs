//! PyO3 bindings for `polycross`.
//!
//! Notes
//! - Keep bindings thin and predictable: vertices cross the boundary as a list
//!   of `(x, y)` tuples, counts come back as `int`, errors as `ValueError`.
//! - Reading vertex files stays on the Python side.

use pyo3::prelude::*;

mod common;
mod count;

#[pymodule]
fn polygon_intersections(_py: Python, m: &PyModule) -> PyResult<()> {
    count::register(m)?;
    m.add("__version__", polycross::VERSION)?;
    Ok(())
}
