//! Command-line tic-tac-toe with minimax and alpha-beta engines.

#![warn(missing_docs)]

mod cli;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_core::GameService;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => shell::run(service_with(None)),
        Some(Command::Shell { seed }) => shell::run(service_with(seed)),
        Some(Command::Simulate { games, seed, json }) => run_simulation(games, seed, json),
    }
}

/// Builds the game service, seeded when a seed was given.
fn service_with(seed: Option<u64>) -> GameService {
    match seed {
        Some(seed) => GameService::seeded(seed),
        None => GameService::new(),
    }
}

/// Runs a one-shot batch of engine-vs-engine games and prints the tally.
fn run_simulation(games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let mut service = service_with(seed);
    info!(games, "Running simulation");
    let report = service.simulate(games)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
