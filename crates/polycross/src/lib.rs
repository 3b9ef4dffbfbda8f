//! Intersection counting for diagonals of simple polygons.
//!
//! Layers
//! - `kernel`: orientation and four-way segment classification (exact by default).
//! - `polygon`: validated vertex ring with modular index helpers.
//! - `count`: single-diagonal, all-diagonals, and line modes over a `Polygon`.
//! - `random`: reproducible simple/convex polygons for tests and benches.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod count;
pub mod error;
pub mod kernel;
pub mod polygon;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use count::{count_intersections, CountCfg, Line2, Mode, Strategy};
pub use error::GeomError;
pub use nalgebra::Vector2 as Vec2;
pub use polygon::{Diagonal, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::count::{count_intersections, CountCfg, Line2, Mode, Strategy};
    pub use crate::error::GeomError;
    pub use crate::kernel::{
        orientation, segments_intersect, Orientation, Seg2, SegmentIntersection, Tolerance,
    };
    pub use crate::polygon::{Diagonal, Polygon};
    pub use crate::random::{
        draw_polygon_radial, regular_polygon, RadialCfg, ReplayToken, VertexCount,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Count the distinct places where the line `y = x` meets the polygon boundary.
///
/// `vertices` is the ordered `(x, y)` sequence supplied by a vertex source.
/// Crossed edges, edges lying on the line, and vertices on the line that bound
/// no such edge count once each. Exact predicates.
pub fn count_intersections_with_diag(vertices: &[(f64, f64)]) -> Result<usize, GeomError> {
    let poly = Polygon::from_xy(vertices)?;
    count_intersections(&poly, &CountCfg::line(Line2::main_diagonal()))
}
