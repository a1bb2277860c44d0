//! Run the animation loop headless and print per-frame counts.
//!
//! Usage:
//!   cargo run -p frontmesh --example animate -- [bodies] [frames]
//!
//! Each line: frame index, hull vertices, triangles, edges.

use frontmesh::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let bodies = args.next().and_then(|s| s.parse().ok()).unwrap_or(128);
    let frames: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    let cfg = SceneCfg {
        bodies,
        ..SceneCfg::default()
    };
    let mut scene = match Scene::random(cfg, 2025) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("animate: {e}");
            return;
        }
    };
    for k in 0..frames {
        scene.step(1.0 / 60.0);
        let pts = scene.positions();
        match compute_frame(&pts, GeomCfg::default()) {
            Ok(f) => println!(
                "frame {k}: hull={} triangles={} edges={}",
                f.hull.len(),
                f.triangles.len(),
                f.edges.len()
            ),
            Err(e) => println!("frame {k}: skipped ({e})"),
        }
    }
}
