//! Configuration discovery and effective settings resolution.
//!
//! ecss-check reads `ecss-check.toml|yaml|yml` from the project root (or the
//! file passed with `--config`) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `report`: none (no report document)
//! - `exclude`: empty
//!
//! Overrides precedence: CLI > config file > defaults. The verdict policy is
//! fixed and has no configuration surface.

use crate::error::{CheckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["ecss-check.toml", "ecss-check.yaml", "ecss-check.yml"];
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `ecss-check.toml|yaml`.
pub struct CheckerConfig {
    pub output: Option<String>,
    /// Report path, relative to the project root unless absolute.
    pub report: Option<String>,
    /// Root-relative globs removed from file discovery.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub project_root: PathBuf,
    pub output: String,
    pub report: Option<PathBuf>,
    pub exclude: Vec<String>,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
}

/// Load the config at an explicit path; format follows the extension.
pub fn load_config_file(path: &Path) -> Result<CheckerConfig> {
    let s = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        serde_yaml::from_str::<CheckerConfig>(&s).map_err(|e| e.to_string())
    } else {
        toml::from_str::<CheckerConfig>(&s).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| CheckError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Find and load the first `ecss-check.*` file in `root`.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, CheckerConfig)>> {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        if p.is_file() {
            let cfg = load_config_file(&p)?;
            return Ok(Some((p, cfg)));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by validating the project path and merging CLI
/// flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_project: &str,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
    cli_report: Option<&str>,
) -> Result<Effective> {
    let given = PathBuf::from(cli_project);
    let project_root = given
        .canonicalize()
        .map_err(|_| CheckError::ProjectNotFound {
            path: std::path::absolute(&given).unwrap_or(given.clone()),
        })?;

    let loaded = match cli_config {
        Some(p) => {
            let p = PathBuf::from(p);
            let cfg = load_config_file(&p)?;
            Some((p, cfg))
        }
        None => load_config(&project_root)?,
    };
    let (config_path, cfg) = match loaded {
        Some((p, c)) => (Some(p), c),
        None => (None, CheckerConfig::default()),
    };

    if let (Some(mode), Some(path)) = (cfg.output.as_deref(), config_path.as_ref()) {
        if !OUTPUT_MODES.contains(&mode) {
            return Err(CheckError::Config {
                path: path.clone(),
                message: format!("unknown output '{}' (expected human|json)", mode),
            });
        }
    }

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let report = match cli_report {
        Some(r) => Some(PathBuf::from(r)),
        None => cfg.report.map(|r| project_root.join(r)),
    };

    Ok(Effective {
        project_root,
        output,
        report,
        exclude: cfg.exclude,
        config_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str().unwrap(), None, None, None).unwrap();
        assert_eq!(eff.output, "human");
        assert!(eff.report.is_none());
        assert!(eff.exclude.is_empty());
        assert!(eff.config_path.is_none());
        assert_eq!(eff.project_root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_project_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = resolve_effective(missing.to_str().unwrap(), None, None, None).unwrap_err();
        match err {
            CheckError::ProjectNotFound { path } => assert!(path.ends_with("does-not-exist")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_toml_and_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("ecss-check.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
report = "out/compliance.md"
exclude = ["vendor/**"]
"#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str().unwrap(), None, None, None).unwrap();
        assert_eq!(eff.output, "json");
        assert_eq!(
            eff.report,
            Some(root.canonicalize().unwrap().join("out/compliance.md"))
        );
        assert_eq!(eff.exclude, vec!["vendor/**".to_string()]);

        // CLI overrides config
        let eff = resolve_effective(root.to_str().unwrap(), None, Some("human"), Some("r.md")).unwrap();
        assert_eq!(eff.output, "human");
        assert_eq!(eff.report, Some(PathBuf::from("r.md")));
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("ecss-check.yaml"), "output: json\nexclude:\n  - build/**\n").unwrap();
        let eff = resolve_effective(root.to_str().unwrap(), None, None, None).unwrap();
        assert_eq!(eff.output, "json");
        assert_eq!(eff.exclude, vec!["build/**".to_string()]);
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("custom.toml");
        fs::write(&cfg, "output = \"json\"\n").unwrap();
        let proj = dir.path().join("proj");
        fs::create_dir_all(&proj).unwrap();
        let eff =
            resolve_effective(proj.to_str().unwrap(), cfg.to_str(), None, None).unwrap();
        assert_eq!(eff.output, "json");
        assert_eq!(eff.config_path, Some(cfg));
    }

    #[test]
    fn test_unknown_output_mode_in_config_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ecss-check.toml"), "output = \"xml\"\n").unwrap();
        match resolve_effective(dir.path().to_str().unwrap(), None, None, None) {
            Err(CheckError::Config { message, .. }) => assert!(message.contains("xml")),
            other => panic!("expected config error, got {:?}", other.map(|e| e.output)),
        }
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ecss-check.toml"), "output = [").unwrap();
        let err = resolve_effective(dir.path().to_str().unwrap(), None, None, None);
        assert!(matches!(err, Err(CheckError::Config { .. })));
    }
}
