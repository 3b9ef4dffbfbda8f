//! Geometric predicate kernel (leaf component).
//!
//! Purpose
//! - Answer "how do these points/segments relate" without contradictory
//!   classifications from naive floating-point comparison.
//! - Keep the tolerance policy in one function (`orientation_tol`) that every
//!   other predicate reuses.
//!
//! Code cross-refs: `Seg2`, `Tolerance`, `count::*`

mod predicates;
mod types;

pub use predicates::{
    on_segment, on_segment_tol, orientation, orientation_tol, segments_intersect,
    segments_intersect_tol,
};
pub use types::{check_finite, Orientation, Seg2, SegmentIntersection, Tolerance};
