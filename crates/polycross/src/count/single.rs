//! Single designated diagonal against every polygon edge.

use crate::error::GeomError;
use crate::kernel::{on_segment_tol, segments_intersect_tol, SegmentIntersection, Tolerance};
use crate::polygon::Polygon;

use super::cfg::CountCfg;

/// Count edges crossed by the diagonal `(i, j)` (default `(0, n/2)`).
///
/// Touches at the diagonal's own endpoints are adjacency, never crossings.
/// With `count_touches`, other touches count once per touched vertex; vertices
/// that bound an edge lying on the diagonal are absorbed by that edge.
pub(super) fn count_single_diagonal(
    poly: &Polygon,
    diagonal: Option<(usize, usize)>,
    cfg: &CountCfg,
    tol: Tolerance,
) -> Result<usize, GeomError> {
    let n = poly.len();
    let d = match diagonal {
        Some((i, j)) => poly.diagonal(i, j)?,
        // a triangle has no diagonals
        None if n < 4 => return Ok(0),
        None => poly.diagonal(0, n / 2)?,
    };
    let ds = poly.diagonal_segment(d)?;

    let mut count = 0usize;
    let mut touched = vec![false; n];
    let mut absorbed = vec![false; n];
    for (k, e) in poly.edges() {
        let k1 = poly.next(k);
        match segments_intersect_tol(&ds, &e, tol) {
            SegmentIntersection::Proper => count += 1,
            SegmentIntersection::CollinearOverlap => {
                absorbed[k] = true;
                absorbed[k1] = true;
                if cfg.count_collinear_overlap_as_one {
                    count += 1;
                }
            }
            SegmentIntersection::EndpointTouch => {
                if !cfg.count_touches || d.has_vertex(k) || d.has_vertex(k1) {
                    continue;
                }
                if on_segment_tol(e.a, &ds, tol) {
                    touched[k] = true;
                } else if on_segment_tol(e.b, &ds, tol) {
                    touched[k1] = true;
                } else {
                    // diagonal endpoint resting on the edge interior
                    count += 1;
                }
            }
            SegmentIntersection::None => {}
        }
    }
    let vertex_touches = (0..n).filter(|&v| touched[v] && !absorbed[v]).count();
    Ok(count + vertex_touches)
}
