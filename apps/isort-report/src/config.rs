//! Configuration discovery and effective settings resolution.
//!
//! isort-report reads `isort-report.toml|yaml|yml` from the repository root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `bin`: `isort`
//! - `args`, `patterns`: empty
//! - `reporter`: `default`
//! - `reportOnSuccess`: true
//! - `failAfterError`: false
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{CheckError, Result};
use crate::reporter::ReportMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["isort-report.toml", "isort-report.yaml", "isort-report.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `isort-report.toml|yaml`.
pub struct ReportConfig {
    pub bin: Option<String>,
    #[serde(default)]
    pub args: Option<Vec<String>>,
    /// isort settings file passed as `--config=`.
    pub config: Option<String>,
    pub reporter: Option<String>,
    #[serde(rename = "reportOnSuccess")]
    pub report_on_success: Option<bool>,
    #[serde(rename = "failAfterError")]
    pub fail_after_error: Option<bool>,
    pub output: Option<String>,
    /// Globs used when no files are given on the command line.
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone)]
/// Values supplied on the command line; `None` defers to the config file.
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub bin: Option<String>,
    pub args: Vec<String>,
    pub config: Option<String>,
    pub reporter: Option<String>,
    pub report_on_success: Option<bool>,
    pub fail_after_error: Option<bool>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub bin: String,
    pub args: Vec<String>,
    pub config: Option<String>,
    pub reporter: ReportMode,
    pub report_on_success: bool,
    pub fail_after_error: bool,
    pub output: String,
    pub patterns: Vec<String>,
    /// Whether a config file was found.
    pub loaded: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `isort-report.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

fn invalid(path: &Path, message: impl ToString) -> CheckError {
    CheckError::Config {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Load `ReportConfig` from `isort-report.toml` or `.yaml|yml` if present.
///
/// A file that exists but does not parse is an error, not a silent default.
pub fn load_config(root: &Path) -> Result<Option<ReportConfig>> {
    let toml_path = root.join(CONFIG_FILES[0]);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).map_err(|e| invalid(&toml_path, e))?;
        let cfg: ReportConfig = toml::from_str(&s).map_err(|e| invalid(&toml_path, e))?;
        return Ok(Some(cfg));
    }
    for yml in &CONFIG_FILES[1..] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).map_err(|e| invalid(&p, e))?;
            let cfg: ReportConfig = serde_yaml::from_str(&s).map_err(|e| invalid(&p, e))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let loaded_cfg = load_config(&repo_root)?;
    let loaded = loaded_cfg.is_some();
    let cfg = loaded_cfg.unwrap_or_default();

    let bin = cli
        .bin
        .clone()
        .or(cfg.bin)
        .unwrap_or_else(|| "isort".to_string());

    let args = if cli.args.is_empty() {
        cfg.args.unwrap_or_default()
    } else {
        cli.args.clone()
    };

    let reporter = ReportMode::from_name(cli.reporter.as_deref().or(cfg.reporter.as_deref()));

    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Ok(Effective {
        repo_root,
        bin,
        args,
        config: cli.config.clone().or(cfg.config),
        reporter,
        report_on_success: cli
            .report_on_success
            .or(cfg.report_on_success)
            .unwrap_or(true),
        fail_after_error: cli
            .fail_after_error
            .or(cfg.fail_after_error)
            .unwrap_or(false),
        output,
        patterns: cfg.patterns.unwrap_or_default(),
        loaded,
    })
}
