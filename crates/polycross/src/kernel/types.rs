//! Kernel value types: orientation sign, intersection class, segment, tolerance.
//!
//! - `Tolerance`: the single absolute distance slack used by every predicate.
//! - `Seg2`: validated closed segment (finite, non-degenerate).
//! - `Orientation`, `SegmentIntersection`: tagged results, never collapsed to bool.

use nalgebra::Vector2;

use crate::error::GeomError;

/// Rotational sense of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    #[inline]
    pub(crate) fn from_det(det: f64) -> Self {
        if det > 0.0 {
            Orientation::CounterClockwise
        } else if det < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Opposite sense; `Collinear` maps to itself.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// Four-way classification of a segment pair.
///
/// Counting policies depend on the distinction between the variants, so callers
/// match on it instead of asking "do they intersect".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentIntersection {
    /// Disjoint.
    None,
    /// Single crossing point interior to both segments.
    Proper,
    /// An endpoint of one segment lies on the other, without crossing.
    EndpointTouch,
    /// Same supporting line, overlap of positive length.
    CollinearOverlap,
}

/// Absolute distance tolerance shared by all predicates.
///
/// `abs == 0` selects exact predicates. Build scale-aware values with
/// [`Tolerance::relative`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Tolerance {
    pub abs: f64,
}

impl Tolerance {
    pub const EXACT: Tolerance = Tolerance { abs: 0.0 };

    /// `eps` relative to `scale` (typically the bounding-box diagonal).
    pub fn relative(eps: f64, scale: f64) -> Result<Self, GeomError> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(GeomError::InvalidTolerance(eps));
        }
        Ok(Self { abs: eps * scale })
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.abs <= 0.0
    }
}

/// Reject NaN/inf coordinates.
#[inline]
pub fn check_finite(p: Vector2<f64>) -> Result<(), GeomError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeomError::InvalidGeometry { x: p.x, y: p.y })
    }
}

/// Closed segment `[a, b]` with finite, distinct endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Seg2 {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Result<Self, GeomError> {
        check_finite(a)?;
        check_finite(b)?;
        if a == b {
            return Err(GeomError::DegenerateSegment { x: a.x, y: a.y });
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.a.x.min(self.b.x)
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.a.x.max(self.b.x)
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.a.y.min(self.b.y)
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.a.y.max(self.b.y)
    }

    /// Bounding-box membership, inclusive, enlarged by `slack`.
    #[inline]
    pub fn box_contains(&self, p: Vector2<f64>, slack: f64) -> bool {
        p.x >= self.min_x() - slack
            && p.x <= self.max_x() + slack
            && p.y >= self.min_y() - slack
            && p.y <= self.max_y() + slack
    }
}
