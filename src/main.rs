use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use particle_backdrop::{snapshot, Backdrop, BackdropConfig, BackdropError};
use tracing_subscriber::EnvFilter;

/// Animated particle-field backdrop.
#[derive(clap::Parser, Debug, Default, PartialEq)]
#[clap(name = "particle-backdrop")]
struct Args {
    /// JSON configuration file.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed.
    #[clap(long)]
    seed: Option<u64>,
    /// Render headless and write a PNG here instead of opening a window.
    #[clap(long)]
    snapshot: Option<PathBuf>,
    /// Frames to render for a snapshot.
    #[clap(long)]
    frames: Option<u32>,
    /// Window or snapshot size, as WxH.
    #[clap(long, value_parser = parse_size)]
    size: Option<(u32, u32)>,
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("expected WxH, got {value:?}");
    let (w, h) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w = w.trim().parse().map_err(|_| invalid())?;
    let h = h.trim().parse().map_err(|_| invalid())?;
    Ok((w, h))
}

fn run(args: Args) -> Result<(), BackdropError> {
    let mut config = match &args.config {
        Some(path) => BackdropConfig::load(path)?,
        None => BackdropConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some((width, height)) = args.size {
        config.window.width = width;
        config.window.height = height;
    }

    let backdrop = Backdrop::from_config(config);
    match args.snapshot {
        Some(path) => {
            let viewport = backdrop.config().window.viewport();
            let canvas = backdrop.snapshot(viewport, args.frames.unwrap_or(120))?;
            snapshot::save(&canvas, path)?;
            Ok(())
        }
        None => backdrop.run(),
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "particle-backdrop failed");
            ExitCode::FAILURE
        }
    }
}
