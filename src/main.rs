//! Runlog - execution history rendering
//!
//! CLI entry point: reads the execution log and prints it in the chosen format.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use runlog::cli::{ColorMode, LogFormat, Palette};
use runlog::config::{Settings, DEFAULT_CONFIG_FILE};
use runlog::execution::{ExecutionLog, TemplateExecution};

/// Show the history of executed command templates
///
/// Without ids, prints the most recent executions, oldest first.
#[derive(Parser, Debug)]
#[command(name = "runlog", version, about)]
struct Cli {
    /// Execution ids to show (default: most recent executions)
    ids: Vec<String>,

    /// Output format
    #[arg(long, short)]
    format: Option<LogFormat>,

    /// When to use colors
    #[arg(long)]
    color: Option<ColorMode>,

    /// Show only the last N executions (0 = all)
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Path to the runlog.toml settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the execution log
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(long, short)]
    verbose: bool,
}

/// Display options after merging command-line flags over the settings file
#[derive(Debug, PartialEq, Eq)]
struct Options {
    format: LogFormat,
    color: ColorMode,
    limit: usize,
    log_dir: PathBuf,
}

/// Flags given on the command line win; anything left unset comes from
/// `settings`.
fn effective_options(cli: &Cli, settings: &Settings) -> Options {
    Options {
        format: cli.format.unwrap_or(settings.display.format),
        color: cli.color.unwrap_or(settings.display.color),
        limit: cli.limit.unwrap_or(settings.display.limit),
        log_dir: cli
            .log_dir
            .clone()
            .unwrap_or_else(|| settings.log.dir.clone()),
    }
}

/// Render every execution to `w`, separating multi-line records with a
/// blank line and terminating single-line records with a newline.
fn render_all<W: Write>(
    w: &mut W,
    format: LogFormat,
    palette: Palette,
    executions: &[TemplateExecution],
) -> Result<()> {
    for (i, exec) in executions.iter().enumerate() {
        if i > 0 && format.is_multiline() {
            writeln!(w)?;
        }

        tracing::debug!(record_id = %exec.id, format = ?format, "rendering execution");
        format.printer(&mut *w, palette).print(exec)?;

        if matches!(format, LogFormat::Short | LogFormat::Id) {
            writeln!(w)?;
        }
    }
    w.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    runlog::logging::init(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load(path, true),
        None => Settings::load(DEFAULT_CONFIG_FILE, false),
    }
    .context("Failed to load settings")?;

    let options = effective_options(&cli, &settings);
    let palette = options.color.palette();

    let log = ExecutionLog::open(&options.log_dir);
    let executions = log
        .select(&cli.ids, options.limit)
        .with_context(|| format!("Failed to load executions from {}", log.log_path().display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_all(&mut out, options.format, palette, &executions)
}
