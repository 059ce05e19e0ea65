//! canvasfix CLI

use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use canvasfix_core::artifact::{check_file, patch_file, PatchReport, DEFAULT_ARTIFACT_PATH};
use canvasfix_core::output::{write_report_json, write_report_plain};
use canvasfix_core::rule::PatchOutcome;

/// Patch wasm-bindgen glue so OffscreenCanvas 2D contexts pass its
/// `instanceof` check. Run after `wasm-pack build`.
#[derive(Debug, Parser)]
#[command(
    name = "canvasfix",
    about = "Rewrite `instanceof CanvasRenderingContext2D` in pkg/wasm_demos_bg.js"
)]
pub struct Cli {
    /// Report whether the fix is still pending without writing the file
    #[arg(long = "check", action = ArgAction::SetTrue)]
    check: bool,

    /// Emit the run report as JSON instead of the completion notice
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Parse CLI args and patch the default artifact.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!(
        path = DEFAULT_ARTIFACT_PATH,
        mode = mode_name(&cli),
        json = cli.json,
        "starting run"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(&cli, Path::new(DEFAULT_ARTIFACT_PATH), &mut handle)
}

fn execute(cli: &Cli, path: &Path, mut out: impl Write) -> Result<()> {
    let report = if cli.check {
        check_file(path)?
    } else {
        patch_file(path)?
    };

    if cli.json {
        write_report_json(&report, &mut out)?;
    } else if !cli.check {
        write_report_plain(&report, &mut out)?;
    }

    if cli.check {
        return check_verdict(&report);
    }

    Ok(())
}

fn check_verdict(report: &PatchReport) -> Result<()> {
    match report.outcome {
        PatchOutcome::Applied => Err(anyhow!(
            "{} still needs the canvas fix",
            report.path.display()
        )),
        PatchOutcome::AlreadyApplied | PatchOutcome::NotFound => Ok(()),
    }
}

fn mode_name(cli: &Cli) -> &'static str {
    if cli.check {
        "check"
    } else {
        "patch"
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    // Logging is best effort; a failed install must not block the patch.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
