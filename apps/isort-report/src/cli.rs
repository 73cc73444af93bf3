//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "isort-report",
    version,
    about = "Run isort --check-only and report its findings",
    long_about = "isort-report: batch files through `isort --check-only`, parse its output, and report the findings.\n\nConfiguration precedence: CLI > isort-report.toml > defaults.",
    after_help = "Examples:\n  isort-report check src/app.py src/util.py\n  isort-report check --reporter fancy --fail-after-error\n  isort --check-only -vb src | isort-report parse --reporter verbose",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(clap::Args, Debug, Clone)]
/// Reporting flags shared by `check` and `parse`.
pub struct ReportArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Reporter: default|original|fancy|verbose (default: default)")]
    pub reporter: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_fail_after_error", help = "Exit non-zero when errors were found")]
    pub fail_after_error: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "fail_after_error", help = "Exit zero even when errors were found (overrides config)")]
    pub no_fail_after_error: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "report_on_success", help = "Skip the reporter entirely when no errors were found")]
    pub quiet_on_success: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "quiet_on_success", help = "Run the reporter on clean results too (overrides config)")]
    pub report_on_success: bool,
}

/// Collapse a `--flag` / `--no-flag` pair; `None` defers to the config file.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl ReportArgs {
    pub fn fail_after_error(&self) -> Option<bool> {
        flag_pair(self.fail_after_error, self.no_fail_after_error)
    }

    pub fn report_on_success(&self) -> Option<bool> {
        flag_pair(self.report_on_success, self.quiet_on_success)
    }
}

#[derive(Subcommand, Debug)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current isort-report version.")]
    Version,
    /// Run isort over files and report
    #[command(
        about = "Run isort and report findings",
        long_about = "Spawn isort once over the sorted batch of files, parse its output, and report. Without FILES, `patterns` from isort-report.toml are used.",
        after_help = "Examples:\n  isort-report check a.py b.py\n  isort-report check --bin 'python -m isort' --isort-config setup.cfg"
    )]
    Check {
        #[command(flatten)]
        report: ReportArgs,
        #[arg(long, help = "isort executable, may include leading words (default: isort)")]
        bin: Option<String>,
        #[arg(long = "isort-config", help = "Settings file passed to isort as --config=")]
        isort_config: Option<String>,
        #[arg(long = "arg", help = "Extra argument for isort (repeatable)", allow_hyphen_values = true)]
        args: Vec<String>,
        #[arg(help = "Files to check")]
        files: Vec<String>,
    },
    /// Parse captured isort output and report
    #[command(
        about = "Parse captured isort output",
        long_about = "Read previously captured `isort --check-only -vb` output from a file or stdin and report it.",
        after_help = "Examples:\n  isort-report parse isort.log --output json"
    )]
    Parse {
        #[command(flatten)]
        report: ReportArgs,
        #[arg(help = "Captured output file (default: stdin)")]
        input: Option<String>,
    },
}
