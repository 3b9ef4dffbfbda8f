//! Infinite line against the polygon boundary.
//!
//! Every distinct feature where the line meets the boundary counts once:
//! an edge crossed at an interior point, an edge lying on the line, or a
//! vertex on the line that does not bound such an edge.

use nalgebra::Vector2;

use crate::error::GeomError;
use crate::kernel::{orientation_tol, Orientation, Seg2, Tolerance};
use crate::polygon::Polygon;

/// Infinite line through two distinct finite points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub p: Vector2<f64>,
    pub q: Vector2<f64>,
}

impl Line2 {
    pub fn new(p: Vector2<f64>, q: Vector2<f64>) -> Result<Self, GeomError> {
        let s = Seg2::new(p, q)?;
        Ok(Self { p: s.a, q: s.b })
    }

    /// The line `y = x`.
    pub fn main_diagonal() -> Self {
        Self {
            p: Vector2::new(0.0, 0.0),
            q: Vector2::new(1.0, 1.0),
        }
    }
}

impl Default for Line2 {
    fn default() -> Self {
        Self::main_diagonal()
    }
}

pub(super) fn count_line(poly: &Polygon, line: Line2, tol: Tolerance) -> usize {
    let n = poly.len();
    let side: Vec<Orientation> = poly
        .vertices()
        .iter()
        .map(|&v| orientation_tol(line.p, line.q, v, tol))
        .collect();

    let mut count = 0usize;
    let mut absorbed = vec![false; n];
    for k in 0..n {
        let k1 = poly.next(k);
        let (a, b) = (side[k], side[k1]);
        if a.is_collinear() && b.is_collinear() {
            count += 1;
            absorbed[k] = true;
            absorbed[k1] = true;
        } else if !a.is_collinear() && !b.is_collinear() && a != b {
            count += 1;
        }
    }
    count + (0..n).filter(|&v| side[v].is_collinear() && !absorbed[v]).count()
}
