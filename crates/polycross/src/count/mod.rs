//! Diagonal intersection counter.
//!
//! Purpose
//! - Enumerate candidate segment pairs for the configured `Mode`, classify each
//!   with the predicate kernel, apply the counting policy, and sum.
//!
//! Policies (fixed, see `CountCfg` for the switches)
//! - Diagonals sharing a vertex never count, whatever the angle.
//! - A collinear overlap of positive length counts exactly once.
//! - Tolerance is relative to the bounding-box diagonal; zero means exact.
//!
//! Assumptions
//! - The polygon is simple. Without `validate_simple` this is not checked and
//!   the count for non-simple input is whatever the enumeration yields; the
//!   counter only raises on the errors listed in `GeomError`.
//!
//! Code cross-refs: `kernel::segments_intersect_tol`, `polygon::Polygon`

mod all_pairs;
mod cfg;
mod line;
mod single;
mod sweep;

pub use cfg::{CountCfg, Mode, Strategy};
pub use line::Line2;

use crate::error::GeomError;
use crate::polygon::Polygon;

/// Count intersections of `poly` under `cfg`. All-or-nothing.
pub fn count_intersections(poly: &Polygon, cfg: &CountCfg) -> Result<usize, GeomError> {
    let tol = cfg.tolerance(poly)?;
    if cfg.validate_simple {
        poly.validate_simple(tol)?;
    }
    let count = match cfg.mode {
        Mode::SingleDiagonal { diagonal } => {
            single::count_single_diagonal(poly, diagonal, cfg, tol)?
        }
        Mode::AllDiagonals { strategy } => {
            let items = all_pairs::diagonal_segments(poly)?;
            match strategy {
                Strategy::BruteForce if cfg.parallel => {
                    all_pairs::count_brute_parallel(&items, cfg, tol)
                }
                Strategy::BruteForce => all_pairs::count_brute(&items, cfg, tol),
                Strategy::Sweep => sweep::count_sweep(&items, cfg, tol),
            }
        }
        Mode::Line(line) => line::count_line(poly, line, tol),
    };
    tracing::debug!(
        n = poly.len(),
        diagonals = poly.diagonal_count(),
        mode = ?cfg.mode,
        tol = tol.abs,
        count,
        "count_intersections"
    );
    Ok(count)
}

#[cfg(test)]
mod tests;
