use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod sim;

use provenance::{write_sidecar, Produced};
use sim::SimParams;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless runner for the moving-point triangulation")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct SimArgs {
    #[arg(long, default_value_t = 2025)]
    seed: u64,
    #[arg(long, default_value_t = 128)]
    bodies: usize,
    #[arg(long, default_value_t = 60)]
    frames: usize,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

impl From<SimArgs> for SimParams {
    fn from(a: SimArgs) -> Self {
        SimParams {
            seed: a.seed,
            bodies: a.bodies,
            frames: a.frames,
            dt: a.dt,
            width: a.width,
            height: a.height,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Simulate and write per-frame counts as JSON
    Run {
        #[command(flatten)]
        sim: SimArgs,
        #[arg(long)]
        out: String,
    },
    /// Simulate and render the last frame as SVG
    Svg {
        #[command(flatten)]
        sim: SimArgs,
        #[arg(long)]
        out: String,
        /// Draw the dashed hull outline
        #[arg(long)]
        hull: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { sim, out } => run(sim.into(), out),
        Action::Svg { sim, out, hull } => svg(sim.into(), out, hull),
        Action::Report => report(),
    }
}

fn ensure_parent(out: &str) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run(params: SimParams, out: String) -> Result<()> {
    tracing::info!(seed = params.seed, bodies = params.bodies, frames = params.frames, out, "run");
    let frames = sim::summaries(&params)?;
    ensure_parent(&out)?;
    std::fs::write(&out, serde_json::to_vec_pretty(&frames)?)
        .with_context(|| format!("writing {out}"))?;
    let prov = write_sidecar(&out, Produced::Run, &params, frames.last())?;
    tracing::info!(frames = frames.len(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn svg(params: SimParams, out: String, hull: bool) -> Result<()> {
    tracing::info!(seed = params.seed, bodies = params.bodies, frames = params.frames, out, "svg");
    let (doc, last) = sim::last_frame_svg(&params, hull)?;
    ensure_parent(&out)?;
    std::fs::write(&out, doc).with_context(|| format!("writing {out}"))?;
    let prov = write_sidecar(&out, Produced::Svg { hull }, &params, Some(&last))?;
    tracing::info!(triangles = last.triangles, provenance = %prov.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "frontmesh": frontmesh::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
