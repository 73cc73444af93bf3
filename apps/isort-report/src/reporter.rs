//! Reporters rendering a `CheckResult` as human-readable log lines.
//!
//! Modes:
//! - `default` (alias `original`): one `<filename> <reason>` line per error.
//! - `fancy`: colored, with repeated filenames blanked out for alignment.
//! - `verbose`: the default lines, then one line per info entry.
//!
//! Unknown mode names fall back to `default`. A custom closure can be
//! supplied instead of a mode and receives the full result.

use crate::error::Result;
use crate::models::{CheckResult, Entry};
use owo_colors::OwoColorize;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Built-in formatting modes.
pub enum ReportMode {
    #[default]
    Default,
    Fancy,
    Verbose,
}

impl ReportMode {
    /// Map a mode name to a mode; `None` and unknown names give `Default`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some("default") | Some("original") => ReportMode::Default,
            Some("fancy") => ReportMode::Fancy,
            Some("verbose") => ReportMode::Verbose,
            Some(other) => {
                tracing::warn!(reporter = other, "unknown reporter, using default");
                ReportMode::Default
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportMode::Default => "default",
            ReportMode::Fancy => "fancy",
            ReportMode::Verbose => "verbose",
        }
    }
}

/// Caller-supplied formatter.
pub type CustomFormatter = Arc<dyn Fn(&CheckResult, &mut dyn Write) -> Result<()> + Send + Sync>;

#[derive(Clone)]
/// A selected reporter: a built-in mode or a custom formatter.
pub enum Reporter {
    Mode(ReportMode),
    Custom(CustomFormatter),
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reporter::Mode(m) => f.debug_tuple("Mode").field(m).finish(),
            Reporter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::Mode(ReportMode::Default)
    }
}

#[derive(Debug, Clone)]
/// Settings shared by every reporter invocation.
pub struct ReportContext {
    /// Working directory; `<cwd>/` is stripped from filenames.
    pub cwd: String,
    pub color: bool,
    /// When false, a successful result is not handed to the formatter.
    pub report_on_success: bool,
}

impl ReportContext {
    pub fn new(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            color: false,
            report_on_success: true,
        }
    }
}

impl Reporter {
    /// Select a built-in reporter by name.
    pub fn select(name: Option<&str>) -> Self {
        Reporter::Mode(ReportMode::from_name(name))
    }

    /// Wrap a custom formatting function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&CheckResult, &mut dyn Write) -> Result<()> + Send + Sync + 'static,
    {
        Reporter::Custom(Arc::new(f))
    }

    /// Render `res` into `sink` according to the selected reporter.
    pub fn report(&self, res: &CheckResult, ctx: &ReportContext, sink: &mut dyn Write) -> Result<()> {
        if res.success && !ctx.report_on_success {
            return Ok(());
        }
        match self {
            Reporter::Mode(ReportMode::Default) => default_report(res, ctx, sink),
            Reporter::Mode(ReportMode::Fancy) => fancy_report(res, ctx, sink),
            Reporter::Mode(ReportMode::Verbose) => verbose_report(res, ctx, sink),
            Reporter::Custom(f) => f(res, sink),
        }
    }
}

/// Remove a leading `<cwd>/` from `filename`, if present.
pub fn strip_cwd<'a>(filename: &'a str, cwd: &str) -> &'a str {
    if cwd.is_empty() {
        return filename;
    }
    filename
        .strip_prefix(cwd)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(filename)
}

fn plain_lines(entries: &[Entry], ctx: &ReportContext, sink: &mut dyn Write) -> Result<()> {
    for e in entries {
        writeln!(sink, "{} {}", strip_cwd(&e.filename, &ctx.cwd), e.reason)?;
    }
    Ok(())
}

fn default_report(res: &CheckResult, ctx: &ReportContext, sink: &mut dyn Write) -> Result<()> {
    plain_lines(res.errors(), ctx, sink)
}

fn verbose_report(res: &CheckResult, ctx: &ReportContext, sink: &mut dyn Write) -> Result<()> {
    plain_lines(res.errors(), ctx, sink)?;
    plain_lines(res.infos(), ctx, sink)
}

fn fancy_report(res: &CheckResult, ctx: &ReportContext, sink: &mut dyn Write) -> Result<()> {
    let mut previous: Option<&str> = None;
    for e in res.errors() {
        let name = strip_cwd(&e.filename, &ctx.cwd);
        let shown = if previous == Some(name) {
            " ".repeat(name.chars().count())
        } else {
            previous = Some(name);
            name.to_string()
        };
        if ctx.color {
            writeln!(sink, "{} {}", shown.cyan(), e.reason.red())?;
        } else {
            writeln!(sink, "{} {}", shown, e.reason)?;
        }
    }
    Ok(())
}
