//! isort-report core library.
//!
//! This crate runs `isort --check-only` over a batch of files, parses its
//! textual output into a typed `CheckResult`, and renders that result with a
//! selectable reporter.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Error type shared by every operation.
//! - `gate`: Fail-gate turning error findings into a failure.
//! - `models`: `Entry` and `CheckResult`.
//! - `output`: Human/JSON printers.
//! - `parse`: Line classifier for isort output.
//! - `reporter`: default/fancy/verbose/custom formatters.
//! - `runner`: File collection and isort process invocation.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod output;
pub mod parse;
pub mod reporter;
pub mod runner;
pub mod utils;

pub use error::{CheckError, Result};
pub use models::{CheckResult, Entry};
pub use parse::parse;
pub use reporter::{ReportContext, ReportMode, Reporter};
