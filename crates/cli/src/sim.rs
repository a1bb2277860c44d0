use anyhow::{Context, Result};
use frontmesh::prelude::*;
use serde::Serialize;

/// Knobs shared by the `run` and `svg` commands.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SimParams {
    pub seed: u64,
    pub bodies: usize,
    pub frames: usize,
    pub dt: f64,
    pub width: f64,
    pub height: f64,
}

impl SimParams {
    pub fn scene_cfg(&self) -> SceneCfg {
        SceneCfg {
            width: self.width,
            height: self.height,
            bodies: self.bodies,
            ..SceneCfg::default()
        }
    }
}

/// Counts for one simulated frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSummary {
    pub frame: usize,
    pub points: usize,
    pub hull: usize,
    pub triangles: usize,
    pub edges: usize,
}

/// Step the scene `frames` times, computing geometry after every step, and
/// hand each frame to `visit`.
pub fn simulate<F>(params: &SimParams, mut visit: F) -> Result<Scene>
where
    F: FnMut(usize, &[Vec2<f64>], &Frame),
{
    let mut scene = Scene::random(params.scene_cfg(), params.seed).context("building scene")?;
    let cfg = GeomCfg::default();
    for k in 0..params.frames {
        scene.step(params.dt);
        let points = scene.positions();
        let frame =
            compute_frame(&points, cfg).with_context(|| format!("computing frame {k}"))?;
        visit(k, &points, &frame);
    }
    Ok(scene)
}

fn summarize(k: usize, points: &[Vec2<f64>], frame: &Frame) -> FrameSummary {
    FrameSummary {
        frame: k,
        points: points.len(),
        hull: frame.hull.len(),
        triangles: frame.triangles.len(),
        edges: frame.edges.len(),
    }
}

pub fn summaries(params: &SimParams) -> Result<Vec<FrameSummary>> {
    let mut out = Vec::with_capacity(params.frames);
    simulate(params, |k, points, frame| out.push(summarize(k, points, frame)))?;
    Ok(out)
}

/// SVG of the last simulated frame and its counts (frame count must be > 0).
pub fn last_frame_svg(params: &SimParams, show_hull: bool) -> Result<(String, FrameSummary)> {
    anyhow::ensure!(params.frames > 0, "need at least one frame to render");
    let mut canvas = SvgCanvas::new(params.width, params.height);
    let opts = DrawOpts {
        show_hull,
        ..DrawOpts::default()
    };
    let mut last = None;
    simulate(params, |k, points, frame| {
        if k + 1 == params.frames {
            draw_frame(&mut canvas, points, frame, opts);
            last = Some(summarize(k, points, frame));
        }
    })?;
    let last = last.context("last frame was not simulated")?;
    Ok((canvas.finish(), last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(frames: usize) -> SimParams {
        SimParams {
            seed: 9,
            bodies: 40,
            frames,
            dt: 1.0 / 30.0,
            width: 400.0,
            height: 300.0,
        }
    }

    #[test]
    fn summaries_are_deterministic() {
        let a = summaries(&params(5)).unwrap();
        let b = summaries(&params(5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        for s in &a {
            assert_eq!(s.points, 40);
            // random points: every point triangulated, Euler on the hull boundary
            assert_eq!(s.triangles, 2 * s.points - s.hull - 2);
            assert_eq!(s.edges, 3 * s.points - s.hull - 3);
        }
    }

    #[test]
    fn svg_of_last_frame() {
        let (svg, last) = last_frame_svg(&params(3), true).unwrap();
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 80);
        assert_eq!(svg.matches("<line").count(), last.edges);
        assert_eq!(Some(&last), summaries(&params(3)).unwrap().last());
        assert!(last_frame_svg(&params(0), false).is_err());
    }

    #[test]
    fn bad_scene_is_reported() {
        let mut p = params(1);
        p.width = -1.0;
        let err = summaries(&p).unwrap_err();
        assert!(format!("{err:#}").contains("invalid scene params"));
    }
}
