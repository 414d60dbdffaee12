//! Command-line interface for the tic-tac-toe shell.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with minimax and alpha-beta engines
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against minimax and alpha-beta engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; without one the interactive shell starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive game shell
    Shell {
        /// Seed for engine tie-breaking and random moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run engine-vs-engine games and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,

        /// Seed for engine tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON instead of the summary line
        #[arg(long)]
        json: bool,
    },
}
