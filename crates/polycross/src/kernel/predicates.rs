//! Orientation and segment-intersection predicates.
//!
//! Robustness
//! - Orientation is evaluated on the lexicographically sorted permutation of the
//!   three points and the permutation parity is applied afterwards. Any
//!   reordering of the same triple therefore sees the same determinant, so
//!   `orientation(a,b,c) == orientation(a,c,b).reversed()` holds bit-for-bit.
//! - With `Tolerance::EXACT` the sign comes from Shewchuk's adaptive `orient2d`
//!   and is exact for every finite `f64` input.
//! - With a positive tolerance, the triple is collinear when its smallest
//!   altitude (the distance from a vertex to the longest side) is within
//!   `tol.abs`. It depends only on the point set, never on which point plays
//!   the query role. `orientation_tol` is the only place this policy lives.

use nalgebra::Vector2;
use std::cmp::Ordering;

use super::types::{Orientation, Seg2, SegmentIntersection, Tolerance};

#[inline]
fn coord(p: Vector2<f64>) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

#[inline]
fn lex_cmp(p: &Vector2<f64>, q: &Vector2<f64>) -> Ordering {
    match p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
fn longest_side(p: &[Vector2<f64>; 3]) -> f64 {
    (p[1] - p[0])
        .norm()
        .max((p[2] - p[1]).norm())
        .max((p[2] - p[0]).norm())
}

/// Exact orientation of `c` relative to the directed line `a → b`.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Orientation {
    orientation_tol(a, b, c, Tolerance::EXACT)
}

/// Orientation under the shared tolerance policy.
pub fn orientation_tol(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    tol: Tolerance,
) -> Orientation {
    let mut p = [a, b, c];
    let mut odd = false;
    // three-element sorting network, tracking swap parity
    for (i, j) in [(0, 1), (1, 2), (0, 1)] {
        if lex_cmp(&p[j], &p[i]) == Ordering::Less {
            p.swap(i, j);
            odd = !odd;
        }
    }
    let det = robust::orient2d(coord(p[0]), coord(p[1]), coord(p[2]));
    let o = if !tol.is_exact() && det.abs() <= tol.abs * longest_side(&p) {
        Orientation::Collinear
    } else {
        Orientation::from_det(det)
    };
    if odd {
        o.reversed()
    } else {
        o
    }
}

/// `p` lies on the closed segment `s` (exact).
#[inline]
pub fn on_segment(p: Vector2<f64>, s: &Seg2) -> bool {
    on_segment_tol(p, s, Tolerance::EXACT)
}

pub fn on_segment_tol(p: Vector2<f64>, s: &Seg2, tol: Tolerance) -> bool {
    orientation_tol(s.a, s.b, p, tol).is_collinear() && s.box_contains(p, tol.abs)
}

/// Exact four-way classification of a segment pair.
#[inline]
pub fn segments_intersect(s1: &Seg2, s2: &Seg2) -> SegmentIntersection {
    segments_intersect_tol(s1, s2, Tolerance::EXACT)
}

/// Classification under the shared tolerance policy. Symmetric in `(s1, s2)`
/// and in the endpoint order of either segment.
pub fn segments_intersect_tol(s1: &Seg2, s2: &Seg2, tol: Tolerance) -> SegmentIntersection {
    // Every other outcome implies boxes within `tol.abs` of each other; callers
    // that prune by bounding boxes rely on this.
    let slack = tol.abs;
    if s1.max_x() < s2.min_x() - slack
        || s2.max_x() < s1.min_x() - slack
        || s1.max_y() < s2.min_y() - slack
        || s2.max_y() < s1.min_y() - slack
    {
        return SegmentIntersection::None;
    }

    let o1 = orientation_tol(s1.a, s1.b, s2.a, tol);
    let o2 = orientation_tol(s1.a, s1.b, s2.b, tol);
    let o3 = orientation_tol(s2.a, s2.b, s1.a, tol);
    let o4 = orientation_tol(s2.a, s2.b, s1.b, tol);

    if (o1.is_collinear() && o2.is_collinear()) || (o3.is_collinear() && o4.is_collinear()) {
        return collinear_overlap(s1, s2, tol);
    }
    if !o1.is_collinear() && !o2.is_collinear() && !o3.is_collinear() && !o4.is_collinear() {
        return if o1 != o2 && o3 != o4 {
            SegmentIntersection::Proper
        } else {
            SegmentIntersection::None
        };
    }
    let touches = (o1.is_collinear() && s1.box_contains(s2.a, slack))
        || (o2.is_collinear() && s1.box_contains(s2.b, slack))
        || (o3.is_collinear() && s2.box_contains(s1.a, slack))
        || (o4.is_collinear() && s2.box_contains(s1.b, slack));
    if touches {
        SegmentIntersection::EndpointTouch
    } else {
        SegmentIntersection::None
    }
}

/// Both segments on one line: compare their extents along the dominant axis of
/// the four points (the line is never perpendicular to it).
fn collinear_overlap(s1: &Seg2, s2: &Seg2, tol: Tolerance) -> SegmentIntersection {
    let span_x = s1.max_x().max(s2.max_x()) - s1.min_x().min(s2.min_x());
    let span_y = s1.max_y().max(s2.max_y()) - s1.min_y().min(s2.min_y());
    let gap = if span_x >= span_y {
        s1.max_x().min(s2.max_x()) - s1.min_x().max(s2.min_x())
    } else {
        s1.max_y().min(s2.max_y()) - s1.min_y().max(s2.min_y())
    };
    if tol.is_exact() {
        return match gap.partial_cmp(&0.0) {
            Some(Ordering::Greater) => SegmentIntersection::CollinearOverlap,
            Some(Ordering::Equal) => SegmentIntersection::EndpointTouch,
            _ => SegmentIntersection::None,
        };
    }
    // axis extent -> length along the common line
    let len = gap * span_x.hypot(span_y) / span_x.max(span_y);
    if len > tol.abs {
        SegmentIntersection::CollinearOverlap
    } else if len >= -tol.abs {
        SegmentIntersection::EndpointTouch
    } else {
        SegmentIntersection::None
    }
}
