//! Brute-force all-diagonals baseline (sequential and rayon fan-out).
//!
//! Each row `a` classifies diagonal `a` against every later diagonal; rows are
//! independent, so the parallel form is a plain map + integer sum.

use rayon::prelude::*;

use crate::error::GeomError;
use crate::kernel::{segments_intersect_tol, Seg2, Tolerance};
use crate::polygon::{Diagonal, Polygon};

use super::cfg::CountCfg;

/// Diagonals paired with their segments, in lexicographic order.
pub(super) fn diagonal_segments(poly: &Polygon) -> Result<Vec<(Diagonal, Seg2)>, GeomError> {
    poly.diagonals()
        .into_iter()
        .map(|d| poly.diagonal_segment(d).map(|s| (d, s)))
        .collect()
}

#[inline]
fn row(items: &[(Diagonal, Seg2)], a: usize, cfg: &CountCfg, tol: Tolerance) -> usize {
    let (da, sa) = &items[a];
    items[a + 1..]
        .iter()
        .filter(|(db, _)| !da.shares_vertex(db))
        .map(|(_, sb)| cfg.weight(segments_intersect_tol(sa, sb, tol)))
        .sum()
}

pub(super) fn count_brute(items: &[(Diagonal, Seg2)], cfg: &CountCfg, tol: Tolerance) -> usize {
    (0..items.len()).map(|a| row(items, a, cfg, tol)).sum()
}

pub(super) fn count_brute_parallel(
    items: &[(Diagonal, Seg2)],
    cfg: &CountCfg,
    tol: Tolerance,
) -> usize {
    (0..items.len())
        .into_par_iter()
        .map(|a| row(items, a, cfg, tol))
        .sum()
}
