//! Runs isort over a batch of files and parses its output.
//!
//! The checker is spawned once for the whole sorted batch. Its stdout is
//! captured in full and handed to [`parse`](crate::parse::parse) after the
//! process exits; stderr passes through to the terminal.

use crate::error::{CheckError, Result};
use crate::models::CheckResult;
use crate::parse::parse;
use glob::glob;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Exit code shells use for a missing command.
pub const COMMAND_NOT_FOUND: i32 = 127;

#[derive(Debug, Clone)]
/// How to invoke the checker.
pub struct RunOptions {
    /// Executable, possibly with leading words (`"python -m isort"`).
    pub bin: String,
    /// Extra arguments placed before the fixed check flags.
    pub args: Vec<String>,
    /// Path passed as `--config=<path>`.
    pub config: Option<String>,
    pub cwd: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            bin: "isort".to_string(),
            args: Vec::new(),
            config: None,
            cwd: PathBuf::from("."),
        }
    }
}

impl RunOptions {
    /// Full command line: bin words, user args, config, check flags, sorted files.
    pub fn build_args(&self, files: &[PathBuf]) -> Vec<String> {
        let mut args: Vec<String> = self.bin.split_whitespace().map(str::to_string).collect();
        args.extend(self.args.iter().cloned());
        if let Some(cfg) = &self.config {
            args.push(format!("--config={}", cfg));
        }
        args.push("--check-only".to_string());
        args.push("-vb".to_string());
        let mut paths: Vec<String> = files
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        paths.sort();
        args.extend(paths);
        args
    }
}

/// Map the checker's exit status to an error, if it is one.
///
/// `0` means clean and `1` means findings were reported; both are parsed.
pub fn classify_exit(code: Option<i32>, bin: &str) -> Result<()> {
    match code {
        Some(0) | Some(1) => Ok(()),
        Some(COMMAND_NOT_FOUND) => Err(CheckError::NotFound {
            bin: bin.to_string(),
        }),
        Some(code) => Err(CheckError::AbnormalExit { code }),
        None => Err(CheckError::Terminated),
    }
}

fn spawn_error(err: io::Error, bin: &str) -> CheckError {
    if err.kind() == io::ErrorKind::NotFound {
        CheckError::NotFound {
            bin: bin.to_string(),
        }
    } else {
        CheckError::Spawn(err)
    }
}

/// Run the checker over `files`.
///
/// Returns `Ok(None)` without spawning anything when `files` is empty.
pub fn check_files(opts: &RunOptions, files: &[PathBuf]) -> Result<Option<CheckResult>> {
    if files.iter().any(|f| f.as_os_str().is_empty()) {
        return Err(CheckError::MissingPath);
    }
    if files.is_empty() {
        tracing::debug!("no files to check; isort not started");
        return Ok(None);
    }
    let mut argv = opts.build_args(files).into_iter();
    let program = argv.next().ok_or_else(|| CheckError::NotFound {
        bin: opts.bin.clone(),
    })?;
    let rest: Vec<String> = argv.collect();
    tracing::debug!(program = %program, args = ?rest, cwd = %opts.cwd.display(), "running isort");

    let mut child = Command::new(&program)
        .args(&rest)
        .current_dir(&opts.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| spawn_error(e, &opts.bin))?;

    let mut raw: Vec<u8> = Vec::new();
    if let Some(mut out) = child.stdout.take() {
        out.read_to_end(&mut raw)?;
    }
    let status = child.wait()?;
    tracing::debug!(code = ?status.code(), bytes = raw.len(), "isort exited");
    classify_exit(status.code(), &opts.bin)?;

    Ok(Some(parse(&String::from_utf8_lossy(&raw))))
}

/// Resolve the files to check.
///
/// Explicit `files` win; relative ones are joined to `cwd`, the directory
/// the caller named them from. Otherwise `patterns` are expanded as globs
/// under the repository `root`.
pub fn collect_files(
    cwd: &Path,
    root: &Path,
    files: &[String],
    patterns: &[String],
) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files
            .iter()
            .map(|f| {
                if f.is_empty() {
                    PathBuf::new()
                } else {
                    cwd.join(f)
                }
            })
            .collect());
    }
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let pattern = root.join(pat).to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| CheckError::Pattern {
            pattern: pat.clone(),
            message: e.to_string(),
        })?;
        targets.extend(entries.flatten().filter(|p| p.is_file()));
    }
    targets.sort();
    targets.dedup();
    Ok(targets)
}
