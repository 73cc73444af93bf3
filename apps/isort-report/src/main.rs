//! isort-report CLI binary entry point.
//! Resolves configuration, runs or parses isort output, and prints results.

use clap::Parser;
use isort_report::cli::{Cli, Commands, ReportArgs};
use isort_report::config::{self, CliOverrides, Effective};
use isort_report::error::Result;
use isort_report::gate::fail_after_error;
use isort_report::models::CheckResult;
use isort_report::output::{print_result, use_colors};
use isort_report::parse::parse;
use isort_report::reporter::{ReportContext, Reporter};
use isort_report::runner::{check_files, collect_files, RunOptions};
use isort_report::utils::{error_prefix, note_prefix};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber; `--debug` wins over `RUST_LOG`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("isort_report=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("isort_report=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn overrides(report: ReportArgs) -> CliOverrides {
    CliOverrides {
        fail_after_error: report.fail_after_error(),
        report_on_success: report.report_on_success(),
        repo_root: report.repo_root,
        reporter: report.reporter,
        output: report.output,
        ..Default::default()
    }
}

fn resolve(cli: &CliOverrides) -> Result<Effective> {
    let eff = config::resolve_effective(cli)?;
    if !eff.loaded && eff.output != "json" {
        eprintln!("{} No isort-report.toml found; using defaults.", note_prefix());
    }
    Ok(eff)
}

/// Report `res`, then apply the fail-gate when enabled.
fn finish(res: &CheckResult, eff: &Effective, cwd: &Path) -> Result<()> {
    let ctx = ReportContext {
        cwd: cwd.to_string_lossy().to_string(),
        color: use_colors(&eff.output),
        report_on_success: eff.report_on_success,
    };
    tracing::debug!(
        reporter = eff.reporter.name(),
        output = %eff.output,
        errors = res.error_count(),
        "reporting result"
    );
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    print_result(res, &eff.output, &Reporter::Mode(eff.reporter), &ctx, &mut sink)?;
    if eff.fail_after_error {
        fail_after_error(res)?;
    }
    Ok(())
}

fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            report,
            bin,
            isort_config,
            args,
            files,
        } => {
            let cli = CliOverrides {
                bin,
                config: isort_config,
                args,
                ..overrides(report)
            };
            let eff = resolve(&cli)?;
            let cwd = std::env::current_dir()?;
            let targets = collect_files(&cwd, &eff.repo_root, &files, &eff.patterns)?;
            let opts = RunOptions {
                bin: eff.bin.clone(),
                args: eff.args.clone(),
                config: eff.config.clone(),
                cwd: eff.repo_root.clone(),
            };
            match check_files(&opts, &targets)? {
                Some(res) => finish(&res, &eff, &eff.repo_root)?,
                None => tracing::info!("no files to check"),
            }
        }
        Commands::Parse { report, input } => {
            let eff = resolve(&overrides(report))?;
            let raw = match input.as_deref() {
                Some(path) if path != "-" => std::fs::read_to_string(path)?,
                _ => {
                    let mut s = String::new();
                    std::io::stdin().read_to_string(&mut s)?;
                    s
                }
            };
            let cwd = std::env::current_dir()?;
            finish(&parse(&raw), &eff, &cwd)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("isort-report starting with args: {:?}", cli);

    match run(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            if e.is_findings() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}
