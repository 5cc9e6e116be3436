use anyhow::Context;
use clap::Parser;
use fixgen_core::{FixtureGenerator, config};
use fixgen_io::{ExifToolWriter, ImageEncoder};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Overrides the exiftool executable looked up on PATH
const EXIFTOOL_ENV: &str = "FIXGEN_EXIFTOOL";

/// Generate placeholder JPEG, TIFF, WEBP, PNG and GIF files with fixed EXIF/GPS metadata
#[derive(Debug, Parser)]
#[command(name = "fixgen", version)]
struct Args {
    /// JSON file with any of: filename, width, height, outDir
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("✗ Error generating images: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = config::resolve(args.config.as_deref());

    let exiftool = match std::env::var_os(EXIFTOOL_ENV) {
        Some(path) => ExifToolWriter::with_executable(Path::new(&path)),
        None => ExifToolWriter::new(),
    }
    .context("cannot start exiftool")?;

    let report = FixtureGenerator::new(ImageEncoder, exiftool).run(&config)?;

    if report.failure_count() > 0 {
        warn!(
            "⚠ {} of {} files were not fully generated",
            report.failure_count(),
            report.files.len()
        );
    }
    Ok(())
}
