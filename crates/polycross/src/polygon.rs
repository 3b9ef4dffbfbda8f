//! Polygon as a fixed-size indexed ring.
//!
//! Purpose
//! - Hold the validated vertex sequence once; everything downstream reads it.
//! - Express cyclic adjacency with modular index helpers instead of a graph.
//!
//! Assumptions and conventions
//! - Vertex `i` connects to `(i + 1) % n`; edge `i` is that segment.
//! - Construction checks count (>= 3), finiteness, and that no two cyclically
//!   consecutive vertices coincide. Simplicity is a caller precondition; use
//!   `validate_simple` to check it explicitly.

use nalgebra::Vector2;

use crate::error::GeomError;
use crate::kernel::{check_finite, segments_intersect_tol, Seg2, SegmentIntersection, Tolerance};

/// Segment between two non-adjacent vertices, stored with `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diagonal {
    pub i: usize,
    pub j: usize,
}

impl Diagonal {
    /// Canonical (sorted) form. Does not check adjacency.
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { i, j }
        } else {
            Self { i: j, j: i }
        }
    }

    #[inline]
    pub fn has_vertex(&self, k: usize) -> bool {
        self.i == k || self.j == k
    }

    #[inline]
    pub fn shares_vertex(&self, other: &Diagonal) -> bool {
        self.has_vertex(other.i) || self.has_vertex(other.j)
    }
}

/// Closed polygon over an ordered vertex ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        let n = verts.len();
        if n < 3 {
            return Err(GeomError::InsufficientVertices(n));
        }
        for p in &verts {
            check_finite(*p)?;
        }
        for k in 0..n {
            let p = verts[k];
            if p == verts[(k + 1) % n] {
                return Err(GeomError::DegenerateSegment { x: p.x, y: p.y });
            }
        }
        Ok(Self { verts })
    }

    /// Build from plain `(x, y)` pairs as supplied by a vertex source.
    pub fn from_xy(xy: &[(f64, f64)]) -> Result<Self, GeomError> {
        Self::new(xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vector2<f64> {
        self.verts[i]
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.verts.len()
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        (i + self.verts.len() - 1) % self.verts.len()
    }

    #[inline]
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.next(i) == j || self.next(j) == i
    }

    /// Edge `i`: vertex `i` to vertex `i + 1 (mod n)`.
    #[inline]
    pub fn edge(&self, i: usize) -> Seg2 {
        // consecutive vertices are finite and distinct by construction
        Seg2 {
            a: self.verts[i],
            b: self.verts[self.next(i)],
        }
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, Seg2)> + '_ {
        (0..self.len()).map(move |i| (i, self.edge(i)))
    }

    /// n(n-3)/2 for n >= 4, zero otherwise.
    #[inline]
    pub fn diagonal_count(&self) -> usize {
        let n = self.len();
        if n < 4 {
            0
        } else {
            n * (n - 3) / 2
        }
    }

    /// All diagonals in lexicographic `(i, j)` order.
    pub fn diagonals(&self) -> Vec<Diagonal> {
        let n = self.len();
        let mut out = Vec::with_capacity(self.diagonal_count());
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                out.push(Diagonal { i, j });
            }
        }
        out
    }

    /// Check an explicit vertex pair and return it as a diagonal.
    pub fn diagonal(&self, i: usize, j: usize) -> Result<Diagonal, GeomError> {
        let n = self.len();
        if i >= n || j >= n || i == j || self.are_adjacent(i, j) {
            return Err(GeomError::InvalidDiagonalIndex { i, j, n });
        }
        Ok(Diagonal::new(i, j))
    }

    /// Segment of a diagonal. Fails if two non-adjacent vertices coincide.
    #[inline]
    pub fn diagonal_segment(&self, d: Diagonal) -> Result<Seg2, GeomError> {
        Seg2::new(self.verts[d.i], self.verts[d.j])
    }

    /// Length of the bounding-box diagonal; scale for relative tolerances.
    pub fn bbox_diagonal(&self) -> f64 {
        let mut lo = self.verts[0];
        let mut hi = self.verts[0];
        for p in &self.verts[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (hi - lo).norm()
    }

    /// Check that edges meet only at their shared consecutive vertex.
    ///
    /// Non-adjacent edges must be disjoint; adjacent edges must not fold back
    /// onto each other. O(n²).
    pub fn validate_simple(&self, tol: Tolerance) -> Result<(), GeomError> {
        let n = self.len();
        for i in 0..n {
            let ei = self.edge(i);
            for j in (i + 1)..n {
                let hit = segments_intersect_tol(&ei, &self.edge(j), tol);
                let bad = if self.are_adjacent(i, j) {
                    hit == SegmentIntersection::CollinearOverlap
                } else {
                    hit != SegmentIntersection::None
                };
                if bad {
                    tracing::trace!(edge_a = i, edge_b = j, ?hit, "non-simple polygon");
                    return Err(GeomError::NonSimplePolygon(i, j));
                }
            }
        }
        Ok(())
    }
}
