use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use polycross::{CountCfg, GeomError, Line2, Mode, Polygon, Strategy, Vec2};

pub fn polygon_from_py(vertices: Vec<(f64, f64)>) -> PyResult<Polygon> {
    Polygon::from_xy(&vertices).map_err(map_geom_err)
}

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Mode names accepted from Python: "single", "all", "all-brute", "line".
pub fn mode_from_py(
    mode: &str,
    diagonal: Option<(usize, usize)>,
    line: Option<((f64, f64), (f64, f64))>,
) -> PyResult<Mode> {
    match mode {
        "single" => Ok(Mode::SingleDiagonal { diagonal }),
        "all" => Ok(Mode::AllDiagonals {
            strategy: Strategy::Sweep,
        }),
        "all-brute" => Ok(Mode::AllDiagonals {
            strategy: Strategy::BruteForce,
        }),
        "line" => {
            let line = match line {
                Some(((px, py), (qx, qy))) => {
                    Line2::new(Vec2::new(px, py), Vec2::new(qx, qy)).map_err(map_geom_err)?
                }
                None => Line2::main_diagonal(),
            };
            Ok(Mode::Line(line))
        }
        other => Err(PyValueError::new_err(format!(
            "unknown mode {other:?}; expected single, all, all-brute, or line"
        ))),
    }
}

pub fn cfg_with_mode(mode: Mode) -> CountCfg {
    CountCfg {
        mode,
        ..CountCfg::default()
    }
}
