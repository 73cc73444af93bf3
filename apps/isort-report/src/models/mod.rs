//! Shared data models for parsed checker output.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a classified output line.
pub enum Severity {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One classified line of checker output.
pub struct Entry {
    /// File the line refers to, with a trailing colon; empty for summary lines.
    pub filename: String,
    /// Remainder of the line after the filename, leading space kept.
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Findings collected when the checker printed at least one line.
pub struct Findings {
    pub error_count: usize,
    pub error_list: Vec<Entry>,
    pub info_list: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregate outcome of one checker invocation.
///
/// `findings` is `None` when the checker produced no output at all, which
/// stays distinguishable from output that simply flagged zero errors.
pub struct CheckResult {
    pub success: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub findings: Option<Findings>,
}

impl CheckResult {
    /// Result for a run that produced no output.
    pub fn empty() -> Self {
        Self {
            success: true,
            findings: None,
        }
    }

    /// Build a result from classified lists; `success` follows the error count.
    pub fn from_lists(error_list: Vec<Entry>, info_list: Vec<Entry>) -> Self {
        let error_count = error_list.len();
        Self {
            success: error_count == 0,
            findings: Some(Findings {
                error_count,
                error_list,
                info_list,
            }),
        }
    }

    /// Number of error entries; zero when no output was processed.
    pub fn error_count(&self) -> usize {
        self.findings.as_ref().map_or(0, |f| f.error_count)
    }

    pub fn errors(&self) -> &[Entry] {
        self.findings
            .as_ref()
            .map(|f| f.error_list.as_slice())
            .unwrap_or_default()
    }

    pub fn infos(&self) -> &[Entry] {
        self.findings
            .as_ref()
            .map(|f| f.info_list.as_slice())
            .unwrap_or_default()
    }
}
