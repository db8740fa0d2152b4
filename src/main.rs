//! RogueMaze terminal runner (default binary).
//!
//! Generates a dungeon, hands the terminal to the game until the dungeon is
//! cleared, the player dies or quits, then prints the closing line on the
//! normal screen.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::{Color, Stylize};

use roguemaze::engine::{Game, GameOutcome};
use roguemaze::frontend::TerminalFrontend;
use roguemaze::term::TerminalRenderer;
use roguemaze::types::{GameConfig, GRID_SIZE, MAX_ROOMS};

#[derive(Parser)]
#[command(name = "roguemaze")]
#[command(about = "Walk a dungeon grid and fight what you find")]
#[command(version)]
struct Cli {
    /// Dungeon seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Grid edge length
    #[arg(long, default_value_t = GRID_SIZE)]
    size: u8,

    /// Number of rooms (enemies) to clear
    #[arg(short, long, default_value_t = MAX_ROOMS)]
    rooms: u8,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig::new(cli.size, cli.rooms);
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut game = Game::new(config, seed)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| {
        let mut frontend = TerminalFrontend::new(&mut term);
        game.run(&mut frontend)
    });

    // Always try to restore terminal state.
    let _ = term.exit();
    let outcome = result?;

    print_farewell(outcome, game.state().rooms_cleared(), seed)?;
    Ok(())
}

fn print_farewell(outcome: GameOutcome, cleared: u16, seed: u32) -> Result<()> {
    let color = match outcome {
        GameOutcome::Cleared => Color::Green,
        GameOutcome::Died => Color::Red,
        GameOutcome::Quit => Color::Yellow,
    };
    let mut stdout = std::io::stdout();
    writeln!(stdout, "\n{}\n", outcome.farewell().with(color).bold())?;
    writeln!(stdout, "Rooms cleared: {cleared} (seed {seed})")?;
    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
    Ok(())
}
