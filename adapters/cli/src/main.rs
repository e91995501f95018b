#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs an interactive Snake Pit session.

mod config;
mod terminal;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use snake_pit_game::Game;
use tracing::info;

use self::{
    config::{FileConfig, Settings},
    terminal::{ScreenMode, Terminal},
};

/// Jump over the snakes before they slither onto you.
#[derive(Debug, Parser)]
#[command(name = "snake-pit", version)]
pub(crate) struct Cli {
    /// Number of pit rows.
    #[arg(long)]
    pub(crate) rows: Option<u32>,
    /// Number of pit columns.
    #[arg(long)]
    pub(crate) columns: Option<u32>,
    /// Number of snakes placed at setup.
    #[arg(long)]
    pub(crate) snakes: Option<usize>,
    /// Seed for every random draw; drawn at random when absent.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// TOML file with `[limits]` and `[game]` tables.
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
    /// Play the 3 by 3 mini-game with two snakes.
    #[arg(long)]
    pub(crate) mini: bool,
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("***** {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => config::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&cli, file);
    info!(?settings, "settings resolved");

    let mut game = Game::new(
        settings.rows,
        settings.columns,
        settings.snakes,
        settings.limits,
        settings.seed,
    )
    .context("cannot set up the pit")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mode = ScreenMode::detect(&stdout);
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock(), mode);

    if !terminal.introduce().context("failed to show the introduction")? {
        return Ok(());
    }
    let status = game
        .play(&mut terminal)
        .context("terminal I/O failed during play")?;
    terminal
        .announce(status)
        .context("failed to report the result")?;
    Ok(())
}
