//! Typed failures for the predicate kernel and the counter.
//!
//! Policy
//! - Every failure is reported synchronously; nothing is recovered silently.
//! - Counting is all-or-nothing: an error never comes with a partial count.

use thiserror::Error;

/// Errors raised by polygon construction, the predicate kernel, and counting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A coordinate is NaN or infinite.
    #[error("invalid geometry: non-finite coordinate ({x}, {y})")]
    InvalidGeometry { x: f64, y: f64 },

    /// A segment whose two endpoints coincide.
    #[error("degenerate segment: zero length at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    /// Fewer than three vertices were supplied.
    #[error("insufficient vertices: need at least 3, got {0}")]
    InsufficientVertices(usize),

    /// An explicit diagonal is out of range, a loop, or joins adjacent vertices.
    #[error("invalid diagonal ({i}, {j}) for a polygon with {n} vertices")]
    InvalidDiagonalIndex { i: usize, j: usize, n: usize },

    /// Two edges intersect beyond sharing their common vertex.
    #[error("polygon is not simple: edges {0} and {1} intersect")]
    NonSimplePolygon(usize, usize),

    /// The relative tolerance is negative or not finite.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),
}
