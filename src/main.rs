use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use torus_snake::audio::{AudioSink, Muted, TerminalBell};
use torus_snake::game::config::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use torus_snake::game::{GameConfig, GameEngine};
use torus_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around board")]
struct Cli {
    /// Board width in pixels (a multiple of the 20px cell size)
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u32,

    /// Board height in pixels (a multiple of the 20px cell size)
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u32,

    /// Write logs to this file; the terminal itself is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Silence the terminal bell on eat and game over
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Create game configuration from CLI arguments
    let config = GameConfig::new(cli.width, cli.height);
    let engine = GameEngine::new(config).context("Invalid board size")?;

    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::new(stderr()))
    };

    let mut human_mode = HumanMode::new(engine, audio);
    human_mode.run().await?;

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
