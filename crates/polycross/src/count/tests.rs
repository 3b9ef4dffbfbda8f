use super::*;
use crate::error::GeomError;
use crate::polygon::Polygon;
use crate::random::regular_polygon;
use nalgebra::vector;

fn poly(xy: &[(f64, f64)]) -> Polygon {
    Polygon::from_xy(xy).unwrap()
}

fn square() -> Polygon {
    poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

/// Concave "C": the notch is cut in from the right.
fn notch() -> Polygon {
    poly(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (4.0, 3.0),
        (4.0, 4.0),
        (0.0, 4.0),
    ])
}

/// Bottom zig-zag touching y = 0 at vertices 0, 2, 4, 6; apex above.
fn zigzag(sx: f64) -> Polygon {
    let xy = [
        (0.0, 0.0),
        (0.5, -1.0),
        (1.0, 0.0),
        (1.5, -1.0),
        (2.0, 0.0),
        (2.5, -1.0),
        (3.0, 0.0),
        (1.5, 2.0),
    ];
    let scaled: Vec<(f64, f64)> = xy.iter().map(|&(x, y)| (x * sx, y)).collect();
    poly(&scaled)
}

fn all_ways(p: &Polygon, base: CountCfg) -> [usize; 3] {
    let brute = CountCfg {
        mode: Mode::AllDiagonals {
            strategy: Strategy::BruteForce,
        },
        ..base
    };
    let sweep = CountCfg {
        mode: Mode::AllDiagonals {
            strategy: Strategy::Sweep,
        },
        ..base
    };
    let par = CountCfg {
        parallel: true,
        ..brute
    };
    [
        count_intersections(p, &brute).unwrap(),
        count_intersections(p, &sweep).unwrap(),
        count_intersections(p, &par).unwrap(),
    ]
}

#[test]
fn square_scenarios() {
    let p = square();
    assert_eq!(all_ways(&p, CountCfg::default()), [1, 1, 1]);
    assert_eq!(count_intersections(&p, &CountCfg::single_diagonal(0, 2)).unwrap(), 0);
    assert_eq!(count_intersections(&p, &CountCfg::default()).unwrap(), 0);
}

#[test]
fn triangle_has_no_diagonals() {
    let p = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert_eq!(all_ways(&p, CountCfg::default()), [0, 0, 0]);
    assert_eq!(count_intersections(&p, &CountCfg::default()).unwrap(), 0);
    assert_eq!(
        count_intersections(&p, &CountCfg::single_diagonal(0, 2)),
        Err(GeomError::InvalidDiagonalIndex { i: 0, j: 2, n: 3 })
    );
}

#[test]
fn regular_pentagon_has_five_crossings() {
    let p = regular_polygon(5, 1.0).unwrap();
    assert_eq!(all_ways(&p, CountCfg::default()), [5, 5, 5]);
}

#[test]
fn convex_polygons_match_binomial() {
    fn choose4(n: usize) -> usize {
        n * (n - 1) * (n - 2) * (n - 3) / 24
    }
    for n in 4..=14 {
        let p = regular_polygon(n, 3.0).unwrap();
        let want = choose4(n);
        assert_eq!(all_ways(&p, CountCfg::default()), [want; 3], "n = {n}");
    }
    assert_eq!(choose4(6), 15);
}

#[test]
fn shared_vertex_pairs_never_count() {
    // In a convex polygon every touch is at a shared vertex, so counting
    // touches must not change anything.
    let p = regular_polygon(6, 1.0).unwrap();
    let touches = CountCfg {
        count_touches: true,
        ..CountCfg::default()
    };
    assert_eq!(all_ways(&p, touches), [15; 3]);
    // (0,2) and (0,4) of the zig-zag lie on one line and overlap, but share vertex 0.
    let z = zigzag(1.0);
    let d02 = z.diagonal_segment(z.diagonal(0, 2).unwrap()).unwrap();
    let d04 = z.diagonal_segment(z.diagonal(0, 4).unwrap()).unwrap();
    assert_eq!(
        crate::kernel::segments_intersect(&d02, &d04),
        crate::kernel::SegmentIntersection::CollinearOverlap
    );
}

#[test]
fn collinear_overlap_counts_once_per_pair() {
    // Overlapping pairs on y = 0 without a shared vertex: (0,4)/(2,6) and (0,6)/(2,4).
    for sx in [1.0, 7.5, 1000.0] {
        let z = zigzag(sx);
        let on = all_ways(&z, CountCfg::default());
        let off = all_ways(
            &z,
            CountCfg {
                count_collinear_overlap_as_one: false,
                ..CountCfg::default()
            },
        );
        assert_eq!(on[0], on[1]);
        assert_eq!(on[0], on[2]);
        assert_eq!(off[0], off[1]);
        assert_eq!(on[0] - off[0], 2, "sx = {sx}");
    }
}

#[test]
fn single_diagonal_proper_crossings() {
    let p = notch();
    // (0,0)-(4,3) crosses the notch floor once and ends on vertex 5.
    assert_eq!(count_intersections(&p, &CountCfg::single_diagonal(0, 5)).unwrap(), 1);
    // (0,4)-(4,0) crosses the floor and grazes vertex 4.
    assert_eq!(count_intersections(&p, &CountCfg::single_diagonal(7, 1)).unwrap(), 1);
    let touches = CountCfg {
        count_touches: true,
        ..CountCfg::single_diagonal(7, 1)
    };
    // the two edges meeting at vertex 4 count once together
    assert_eq!(count_intersections(&p, &touches).unwrap(), 2);
}

#[test]
fn single_diagonal_touches_and_overlaps() {
    let z = zigzag(1.0);
    assert_eq!(count_intersections(&z, &CountCfg::single_diagonal(0, 6)).unwrap(), 0);
    let touches = CountCfg {
        count_touches: true,
        ..CountCfg::single_diagonal(0, 6)
    };
    // vertices 2 and 4
    assert_eq!(count_intersections(&z, &touches).unwrap(), 2);

    // Two edges lie along diagonal (0,2).
    let p = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
    assert_eq!(count_intersections(&p, &CountCfg::single_diagonal(0, 2)).unwrap(), 2);
    let off = CountCfg {
        count_collinear_overlap_as_one: false,
        ..CountCfg::single_diagonal(0, 2)
    };
    assert_eq!(count_intersections(&p, &off).unwrap(), 0);
    // vertex 1 is absorbed by the overlapping edges
    let touches = CountCfg {
        count_touches: true,
        ..CountCfg::single_diagonal(0, 2)
    };
    assert_eq!(count_intersections(&p, &touches).unwrap(), 2);
}

#[test]
fn epsilon_absorbs_near_collinear_vertex() {
    let p = poly(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (1.0, 1.0 + 1e-12),
        (0.0, 2.0),
    ]);
    assert_eq!(count_intersections(&p, &CountCfg::single_diagonal(0, 2)).unwrap(), 0);
    let loose = CountCfg {
        epsilon: 1e-9,
        ..CountCfg::single_diagonal(0, 2)
    };
    // edge 2 now lies on the diagonal
    assert_eq!(count_intersections(&p, &loose).unwrap(), 1);
}

#[test]
fn line_mode_counts_distinct_features() {
    // corners (0,0) and (1,1)
    assert_eq!(
        count_intersections(&square(), &CountCfg::line(Line2::main_diagonal())).unwrap(),
        2
    );
    // edge (0,0)-(2,2) on the line absorbs both endpoints
    let on_edge = poly(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    assert_eq!(
        count_intersections(&on_edge, &CountCfg::line(Line2::default())).unwrap(),
        1
    );
    // enters through x = 1 and leaves through x = 2
    let strip = poly(&[(1.0, 0.0), (2.0, 0.0), (2.0, 3.0), (1.0, 3.0)]);
    assert_eq!(
        count_intersections(&strip, &CountCfg::line(Line2::default())).unwrap(),
        2
    );
    // a line that misses the polygon
    let far = Line2::new(vector![0.0, 10.0], vector![1.0, 10.0]).unwrap();
    assert_eq!(count_intersections(&strip, &CountCfg::line(far)).unwrap(), 0);
    assert!(matches!(
        Line2::new(vector![1.0, 1.0], vector![1.0, 1.0]),
        Err(GeomError::DegenerateSegment { .. })
    ));
}

#[test]
fn line_mode_chain_on_the_line() {
    // edges 0 and 1 both lie on y = x; vertex 1 is shared and absorbed
    let p = poly(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)]);
    assert_eq!(count_intersections(&p, &CountCfg::line(Line2::default())).unwrap(), 2);
}

#[test]
fn all_diagonals_touches_without_shared_vertex() {
    // V-notch from the top with its tip (2,2) on diagonal (0,2).
    let p = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
    // (0,2) x (1,4) cross at the tip
    assert_eq!(all_ways(&p, CountCfg::default()), [1; 3]);
    let touches = CountCfg {
        count_touches: true,
        ..CountCfg::default()
    };
    // plus (1,3) ending on (0,2), and (0,3) ending on (1,4)
    assert_eq!(all_ways(&p, touches), [3; 3]);
}

#[test]
fn configuration_errors() {
    let bowtie = poly(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    let strict = CountCfg {
        validate_simple: true,
        ..CountCfg::all_diagonals(Strategy::Sweep)
    };
    assert_eq!(
        count_intersections(&bowtie, &strict),
        Err(GeomError::NonSimplePolygon(0, 2))
    );
    // without validation the bow-tie is simply counted
    assert!(count_intersections(&bowtie, &CountCfg::all_diagonals(Strategy::Sweep)).is_ok());

    let bad_eps = CountCfg {
        epsilon: -1.0,
        ..CountCfg::default()
    };
    assert_eq!(
        count_intersections(&square(), &bad_eps),
        Err(GeomError::InvalidTolerance(-1.0))
    );
    assert_eq!(
        count_intersections(&square(), &CountCfg::single_diagonal(0, 9)),
        Err(GeomError::InvalidDiagonalIndex { i: 0, j: 9, n: 4 })
    );
}

#[test]
fn coincident_non_adjacent_vertices_are_degenerate_diagonals() {
    // vertices 0 and 3 coincide, so diagonal (0,3) has zero length
    let pinched = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0), (-1.0, 1.0), (-1.0, 0.0)]);
    assert!(matches!(
        count_intersections(&pinched, &CountCfg::all_diagonals(Strategy::BruteForce)),
        Err(GeomError::DegenerateSegment { .. })
    ));
}
