use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a tour artifact came from: code revision, crate version, run tag, and the
/// search parameters.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub tag: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn capture(tag: Option<String>, params: Value) -> Self {
        Self {
            code_rev: git_rev(),
            version: cubetour::VERSION,
            tag,
            params,
            outputs: Vec::new(),
        }
    }

    /// Write `<stem>.provenance.json` next to `artifact` and return its path.
    pub fn write_sidecar(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        self.outputs.push(artifact.display().to_string());
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "tour".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` when set, else `git rev-parse HEAD`, else "unknown".
fn git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/runs/tour-n3.json")),
            Path::new("/tmp/runs/tour-n3.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("tour.json");
        fs::write(&artifact, "{}").unwrap();
        let prov = Provenance::capture(None, json!({"width": 3, "turn_rule": "as-given"}));
        let path = prov.write_sidecar(&artifact).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert_eq!(parsed["params"]["width"], 3);
        assert_eq!(parsed["version"], cubetour::VERSION);
        assert!(parsed["tag"].is_null());
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }
}
