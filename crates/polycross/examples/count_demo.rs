//! Count intersections on a few random polygons in every mode.
//!
//! Usage:
//!   cargo run -p polycross --example count_demo -- [vertices] [samples]
//!
//! Prints one line per sample: n, single-diagonal, all-diagonals, line y = x.

use polycross::api::count_all_modes;
use polycross::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let samples: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    println!("n,single,all,line");
    for index in 0..samples {
        let poly = match draw_polygon_radial(cfg, ReplayToken { seed: 2025, index }) {
            Ok(p) => p,
            Err(err) => {
                eprintln!("draw {index}: {err}");
                continue;
            }
        };
        match count_all_modes(&poly, &CountCfg::default()) {
            Ok((single, all, line)) => println!("{},{single},{all},{line}", poly.len()),
            Err(err) => eprintln!("count {index}: {err}"),
        }
    }
}
