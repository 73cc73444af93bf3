//! Parser for `isort --check-only --verbose` output.
//!
//! Each non-empty line is classified by its first space-delimited token:
//!
//! ```text
//! ERROR: <filename> Imports are incorrectly sorted.
//! SUCCESS: <filename> Everything Looks Good!
//! WARNING: <filename> was skipped as it's listed in 'skip' setting
//! Skipped 64 files
//! ```
//!
//! Unrecognized tokens (version banners, headers) are dropped. The parser
//! never fails; missing delimiters degrade to empty slices.

use crate::models::{CheckResult, Entry, Severity};

/// Parse the full captured stdout of one checker run.
pub fn parse(raw: &str) -> CheckResult {
    let mut errors: Vec<Entry> = Vec::new();
    let mut infos: Vec<Entry> = Vec::new();
    let mut processed = 0usize;

    for line in raw.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        processed += 1;
        match classify_line(line) {
            Some((Severity::Error, entry)) => errors.push(entry),
            Some((Severity::Info, entry)) => infos.push(entry),
            None => {}
        }
    }

    if processed == 0 {
        return CheckResult::empty();
    }
    tracing::debug!(
        lines = processed,
        errors = errors.len(),
        infos = infos.len(),
        "parsed isort output"
    );
    CheckResult::from_lists(errors, infos)
}

/// Classify a single non-empty line, or `None` when its token is unknown.
pub fn classify_line(line: &str) -> Option<(Severity, Entry)> {
    let (token, rest) = match line.find(' ') {
        Some(i) => (&line[..i], &line[i + 1..]),
        None => (line, ""),
    };
    match token {
        "ERROR:" => Some((Severity::Error, file_entry(rest))),
        "SUCCESS:" | "WARNING:" => Some((Severity::Info, file_entry(rest))),
        "Skipped" => Some((
            Severity::Info,
            Entry {
                filename: String::new(),
                reason: line.to_string(),
            },
        )),
        _ => None,
    }
}

/// Split `<filename> <reason>`; the reason keeps its leading space.
fn file_entry(rest: &str) -> Entry {
    let (name, reason) = match rest.find(' ') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    Entry {
        filename: format!("{}:", name),
        reason: reason.to_string(),
    }
}
