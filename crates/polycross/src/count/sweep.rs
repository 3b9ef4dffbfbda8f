//! Sort-and-sweep over diagonal x-extents.
//!
//! `segments_intersect_tol` returns `None` for boxes farther apart than the
//! tolerance, so pairs pruned here would contribute nothing in the brute-force
//! scan either. Cost is O(k log k) for the sort plus the box-overlapping pairs.

use crate::kernel::{segments_intersect_tol, Seg2, Tolerance};
use crate::polygon::Diagonal;

use super::cfg::CountCfg;

pub(super) fn count_sweep(items: &[(Diagonal, Seg2)], cfg: &CountCfg, tol: Tolerance) -> usize {
    let slack = 2.0 * tol.abs;
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[a].1.min_x().total_cmp(&items[b].1.min_x()));

    let mut active: Vec<usize> = Vec::new();
    let mut count = 0usize;
    for &cur in &order {
        let (dc, sc) = &items[cur];
        let left = sc.min_x() - slack;
        active.retain(|&a| items[a].1.max_x() >= left);
        for &a in &active {
            let (da, sa) = &items[a];
            if dc.shares_vertex(da) {
                continue;
            }
            if sa.max_y() < sc.min_y() - slack || sc.max_y() < sa.min_y() - slack {
                continue;
            }
            count += cfg.weight(segments_intersect_tol(sa, sc, tol));
        }
        active.push(cur);
    }
    count
}
