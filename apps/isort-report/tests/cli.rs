//! Integration tests for the isort-report binary.
// Command::cargo_bin is deprecated in favor of the cargo_bin! macro; both work.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn workspace() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    (dir, root)
}

fn cmd(root: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("isort-report").unwrap();
    cmd.current_dir(root).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn parse_reports_errors_and_fails_when_asked() {
    let (_dir, root) = workspace();
    let log = root.join("isort.log");
    fs::write(
        &log,
        format!(
            "isort banner\nERROR: {}/a.py Imports are incorrectly sorted.\nSkipped 1 files\n",
            root.display()
        ),
    )
    .unwrap();

    cmd(&root)
        .args(["parse", "isort.log", "--fail-after-error"])
        .assert()
        .code(1)
        .stdout("a.py:  Imports are incorrectly sorted.\n")
        .stderr(predicate::str::contains("Failed with 1 error"));
}

#[test]
fn parse_without_gate_exits_zero() {
    let (_dir, root) = workspace();
    cmd(&root)
        .arg("parse")
        .write_stdin("ERROR: x.py Imports are incorrectly sorted.\nERROR: y.py Imports are incorrectly sorted.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("x.py:"))
        .stdout(predicate::str::contains("y.py:"));
}

#[test]
fn parse_json_output() {
    let (_dir, root) = workspace();
    let out = cmd(&root)
        .args(["parse", "--output", "json"])
        .write_stdin("Skipped 3 files\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["success"], true);
    assert_eq!(v["errorCount"], 0);
    assert_eq!(v["infoList"][0]["reason"], "Skipped 3 files");
}

#[test]
fn parse_verbose_from_config() {
    let (_dir, root) = workspace();
    fs::write(root.join("isort-report.toml"), "reporter = \"verbose\"\n").unwrap();
    cmd(&root)
        .arg("parse")
        .write_stdin("SUCCESS: ok.py Everything Looks Good!\n")
        .assert()
        .success()
        .stdout("ok.py:  Everything Looks Good!\n");
}

#[test]
fn check_with_missing_binary_is_operational_error() {
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "import os\n").unwrap();
    cmd(&root)
        .args(["check", "--bin", "definitely-not-isort", "a.py"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("definitely-not-isort could not be found"));
}

#[cfg(unix)]
#[test]
fn check_with_abnormal_exit_is_operational_error() {
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "import os\n").unwrap();
    let script = root.join("fake-isort.sh");
    fs::write(&script, "#!/bin/sh\necho 'ERROR: a.py bad'\nexit 2\n").unwrap();
    cmd(&root)
        .args(["check", "--bin"])
        .arg(format!("sh {}", script.display()))
        .arg("a.py")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("isort exited with code 2"));
}

#[cfg(unix)]
#[test]
fn check_runs_fake_isort_and_gates() {
    let (_dir, root) = workspace();
    fs::write(root.join("b.py"), "").unwrap();
    let script = root.join("fake-isort.sh");
    fs::write(
        &script,
        "#!/bin/sh\nfor f; do :; done\necho \"ERROR: $f Imports are incorrectly sorted.\"\nexit 1\n",
    )
    .unwrap();
    cmd(&root)
        .args(["check", "--fail-after-error", "--bin"])
        .arg(format!("sh {}", script.display()))
        .arg("b.py")
        .assert()
        .code(1)
        .stdout("b.py:  Imports are incorrectly sorted.\n")
        .stderr(predicate::str::contains("Failed with 1 error"));
}

#[cfg(unix)]
#[test]
fn check_resolves_relative_files_from_invocation_dir() {
    let (_dir, root) = workspace();
    let sub = root.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("a.py"), "").unwrap();
    let script = root.join("fake-isort.sh");
    fs::write(
        &script,
        "#!/bin/sh\nfor f; do :; done\necho \"ERROR: $f Imports are incorrectly sorted.\"\nexit 1\n",
    )
    .unwrap();
    let out = cmd(&sub)
        .args(["check", "--output", "json", "--bin"])
        .arg(format!("sh {}", script.display()))
        .arg("a.py")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        v["errorList"][0]["filename"],
        format!("{}/sub/a.py:", root.display())
    );
}

#[test]
fn cli_flag_overrides_config_fail_after_error() {
    let (_dir, root) = workspace();
    fs::write(root.join("isort-report.toml"), "failAfterError = true\n").unwrap();
    cmd(&root)
        .arg("parse")
        .write_stdin("ERROR: a.py Imports are incorrectly sorted.\n")
        .assert()
        .code(1);
    cmd(&root)
        .args(["parse", "--no-fail-after-error"])
        .write_stdin("ERROR: a.py Imports are incorrectly sorted.\n")
        .assert()
        .success()
        .stdout("a.py:  Imports are incorrectly sorted.\n");
}

#[test]
fn cli_flag_overrides_config_report_on_success() {
    let (_dir, root) = workspace();
    fs::write(
        root.join("isort-report.toml"),
        "reporter = \"verbose\"\nreportOnSuccess = false\n",
    )
    .unwrap();
    cmd(&root)
        .arg("parse")
        .write_stdin("SUCCESS: ok.py Everything Looks Good!\n")
        .assert()
        .success()
        .stdout("");
    cmd(&root)
        .args(["parse", "--report-on-success"])
        .write_stdin("SUCCESS: ok.py Everything Looks Good!\n")
        .assert()
        .success()
        .stdout("ok.py:  Everything Looks Good!\n");
}
