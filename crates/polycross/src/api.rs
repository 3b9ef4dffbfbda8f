//! Curated API surface.
//!
//! Prefer these re-exports over deep module paths; internal layout may change.

// Predicate kernel
pub use crate::kernel::{
    on_segment, on_segment_tol, orientation, orientation_tol, segments_intersect,
    segments_intersect_tol, Orientation, Seg2, SegmentIntersection, Tolerance,
};
// Polygon ring
pub use crate::polygon::{Diagonal, Polygon};
// Counter
pub use crate::count::{count_intersections, CountCfg, Line2, Mode, Strategy};
pub use crate::count_intersections_with_diag;
// Random polygons
pub use crate::random::{
    draw_polygon_radial, regular_polygon, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};

pub use crate::error::GeomError;

/// Count every mode at once: `(single_diagonal, all_diagonals, main_diagonal_line)`.
///
/// All three use `cfg`'s tolerance and policy switches; only the mode differs.
pub fn count_all_modes(
    poly: &Polygon,
    cfg: &CountCfg,
) -> Result<(usize, usize, usize), GeomError> {
    let single = count_intersections(
        poly,
        &CountCfg {
            mode: Mode::SingleDiagonal { diagonal: None },
            ..*cfg
        },
    )?;
    let all = count_intersections(
        poly,
        &CountCfg {
            mode: Mode::AllDiagonals {
                strategy: Strategy::Sweep,
            },
            ..*cfg
        },
    )?;
    let line = count_intersections(
        poly,
        &CountCfg {
            mode: Mode::Line(Line2::main_diagonal()),
            ..*cfg
        },
    )?;
    Ok((single, all, line))
}
