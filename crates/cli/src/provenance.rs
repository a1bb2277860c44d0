use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::sim::{FrameSummary, SimParams};

/// Subcommand that wrote the artifact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Produced {
    Run,
    Svg { hull: bool },
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Contents of `<stem>.provenance.json`.
#[derive(Debug, Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    frontmesh: &'static str,
    callsite: Callsite,
    command: Produced,
    sim: &'a SimParams,
    /// Counts of the last simulated frame; absent when no frame ran.
    last_frame: Option<&'a FrameSummary>,
    outputs: Vec<String>,
}

/// Write `<artifact>.provenance.json` recording which simulation produced
/// `artifact`, with the git commit, library version and callsite.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    command: Produced,
    sim: &SimParams,
    last_frame: Option<&FrameSummary>,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        frontmesh: frontmesh::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        command,
        sim,
        last_frame,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
