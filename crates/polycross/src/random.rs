//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple polygons for property
//!   tests and benchmarks. Results are reproducible from a `(seed, index)` token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular jitter
//!   (kept below half the spacing, so angles stay strictly increasing) and
//!   radial jitter. Connecting the points in angle order gives a star-shaped,
//!   hence simple, polygon. With `radial_jitter = 0` all vertices lie on one
//!   circle and the polygon is convex.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GeomError;
use crate::polygon::Polygon;

/// How many vertices a draw gets (never fewer than three).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let min = min.max(3);
                rng.gen_range(min..=max.max(min))
            }
        }
    }
}

/// Star-shaped sampler parameters.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angle offset per vertex, as a fraction of the spacing 2π/n; clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Relative radius spread: r = base_radius * (1 + u), |u| <= radial_jitter; clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

impl RadialCfg {
    /// Vertices on a circle: convex polygons.
    pub fn convex(vertex_count: VertexCount) -> Self {
        Self {
            vertex_count,
            radial_jitter: 0.0,
            ..Self::default()
        }
    }
}

/// `(seed, index)` pair identifying one draw; equal tokens give equal polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

/// SplitMix64 finalizer.
const fn splitmix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let golden = 0x9e3779b97f4a7c15u64;
        StdRng::seed_from_u64(splitmix(self.seed ^ splitmix(self.index.wrapping_add(golden))))
    }
}

/// Draw a random star-shaped polygon around the origin.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon, GeomError> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let verts = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(verts)
}

/// Regular `n`-gon of circumradius `radius`, first vertex on the positive x-axis.
pub fn regular_polygon(n: usize, radius: f64) -> Result<Polygon, GeomError> {
    let verts = (0..n)
        .map(|k| {
            let th = std::f64::consts::TAU * (k as f64) / (n as f64);
            Vector2::new(th.cos() * radius, th.sin() * radius)
        })
        .collect();
    Polygon::new(verts)
}
