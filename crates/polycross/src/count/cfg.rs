//! Counting configuration.
//!
//! - `CountCfg`: mode, tolerance, and counting policy switches (all with defaults).
//! - `Mode`: which segment pairs are enumerated.
//! - `Strategy`: brute-force baseline or sort-and-sweep for all-diagonals mode.

use crate::error::GeomError;
use crate::kernel::{SegmentIntersection, Tolerance};
use crate::polygon::Polygon;

use super::line::Line2;

/// Enumeration strategy for `Mode::AllDiagonals`. Both give identical counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Every unordered diagonal pair, O(k²).
    #[default]
    BruteForce,
    /// Sweep over x-extents; only pairs with overlapping bounding boxes are classified.
    Sweep,
}

/// What to count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// One diagonal against all edges. `None` selects `(0, n/2)`.
    SingleDiagonal { diagonal: Option<(usize, usize)> },
    /// Unordered pairs of diagonals.
    AllDiagonals { strategy: Strategy },
    /// Distinct features where an infinite line meets the polygon boundary.
    Line(Line2),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::SingleDiagonal { diagonal: None }
    }
}

/// Counting configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountCfg {
    pub mode: Mode,
    /// Tolerance relative to the bounding-box diagonal; `0` means exact predicates.
    pub epsilon: f64,
    /// Collinear overlaps of positive length count as one (else zero).
    pub count_collinear_overlap_as_one: bool,
    /// Also count endpoint touches that are not shared polygon vertices.
    pub count_touches: bool,
    /// Reject non-simple input with `NonSimplePolygon` before counting.
    pub validate_simple: bool,
    /// Fan the brute-force all-diagonals scan out over the rayon pool.
    pub parallel: bool,
}

impl Default for CountCfg {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            epsilon: 0.0,
            count_collinear_overlap_as_one: true,
            count_touches: false,
            validate_simple: false,
            parallel: false,
        }
    }
}

impl CountCfg {
    pub fn all_diagonals(strategy: Strategy) -> Self {
        Self {
            mode: Mode::AllDiagonals { strategy },
            ..Self::default()
        }
    }

    pub fn single_diagonal(i: usize, j: usize) -> Self {
        Self {
            mode: Mode::SingleDiagonal {
                diagonal: Some((i, j)),
            },
            ..Self::default()
        }
    }

    pub fn line(line: Line2) -> Self {
        Self {
            mode: Mode::Line(line),
            ..Self::default()
        }
    }

    /// Absolute tolerance for `poly`.
    pub fn tolerance(&self, poly: &Polygon) -> Result<Tolerance, GeomError> {
        Tolerance::relative(self.epsilon, poly.bbox_diagonal())
    }

    /// Contribution of one classified pair that does not share a vertex.
    #[inline]
    pub(crate) fn weight(&self, hit: SegmentIntersection) -> usize {
        match hit {
            SegmentIntersection::Proper => 1,
            SegmentIntersection::CollinearOverlap => self.count_collinear_overlap_as_one as usize,
            SegmentIntersection::EndpointTouch => self.count_touches as usize,
            SegmentIntersection::None => 0,
        }
    }
}
