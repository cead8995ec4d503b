use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use termsnake::audio;
use termsnake::config::{GameConfig, Mode, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use termsnake::game::Game;
use termsnake::session;
use termsnake::term::{TermInput, TermRenderer};
use termsnake::TermInt;

/// Snake in the terminal
#[derive(Parser)]
#[command(name = "termsnake")]
#[command(about = "Classic snake, played in the terminal")]
struct Args {
    /// Do not ring the terminal bell
    #[arg(long)]
    silent: bool,

    /// Difficulty; hard speeds up as you score
    #[arg(long, value_enum, default_value = "normal")]
    mode: Mode,

    /// Board width, walls included
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: TermInt,

    /// Board height, walls included
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: TermInt,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        width: args.width,
        height: args.height,
        mode: args.mode,
        seed: args.seed,
    };

    let game = Game::new(&config, audio::notifier(args.silent)).context("Failed to set up the game")?;
    let renderer = TermRenderer::new(config.width, config.height).context("Failed to set up the terminal")?;

    session::run(game, renderer, TermInput)?;
    info!("bye");

    Ok(())
}

// The game owns the terminal, so logs can only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
