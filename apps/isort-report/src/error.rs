//! Error types for isort-report operations.
//!
//! Process-level failures (launch, abnormal exit) and configuration problems
//! are distinct from parsed findings: findings only become an error when the
//! fail-gate converts them into [`CheckError::Failed`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for isort-report operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The checker executable could not be found (spawn `NotFound` or exit 127).
    #[error("{bin} could not be found")]
    NotFound { bin: String },

    /// The checker exited with a code other than 0 (clean) or 1 (findings).
    #[error("isort exited with code {code}")]
    AbnormalExit { code: i32 },

    /// The checker was killed before reporting an exit code.
    #[error("isort was terminated by a signal")]
    Terminated,

    /// The checker could not be started for a reason other than a missing binary.
    #[error("failed to start isort: {0}")]
    Spawn(#[source] std::io::Error),

    /// A file handed to the runner carried an empty path.
    #[error("File provided with no path")]
    MissingPath,

    /// Fail-gate outcome: the result carried error findings.
    #[error("Failed with {count} {}", error_noun(.count))]
    Failed { count: usize },

    /// Configuration file could not be read or has invalid values.
    #[error("Invalid configuration at {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// A glob pattern from configuration did not compile.
    #[error("Invalid file pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn error_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "error"
    } else {
        "errors"
    }
}

impl CheckError {
    /// Whether this error came from the fail-gate rather than from running the checker.
    pub fn is_findings(&self) -> bool {
        matches!(self, CheckError::Failed { .. })
    }
}

/// Result type alias for isort-report operations.
pub type Result<T> = std::result::Result<T, CheckError>;
