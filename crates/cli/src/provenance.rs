use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a document came from: code revision, library version, inputs, outputs.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub shapes_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            shapes_version: shapes::VERSION,
            callsite: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    ensure_parent(&sidecar)?;

    let caller = Location::caller();
    let mut doc = Provenance::new(params);
    doc.callsite = Some(Callsite {
        file: caller.file(),
        line: caller.line(),
    });
    doc.outputs.push(artifact.to_string_lossy().into_owned());

    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let base = Path::new("/tmp/output/circle.json");
        assert_eq!(
            sidecar_path(base),
            Path::new("/tmp/output/circle.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_outputs_and_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("tri.json");
        let prov = write_sidecar(&artifact, json!({"sides": [3.0, 4.0, 5.0]})).unwrap();
        assert!(prov.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(&prov).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["sides"][2], 5.0);
        assert_eq!(parsed["shapes_version"], shapes::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().unwrap() > 0);
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn report_without_outputs_skips_callsite() {
        let doc = serde_json::to_value(Provenance::new(json!({}))).unwrap();
        assert!(doc.get("callsite").is_none());
        assert_eq!(doc["outputs"], json!([]));
    }
}
