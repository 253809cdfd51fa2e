//! Command-line interface for strictly_squares.

use clap::{Parser, Subcommand};
use strictly_squares::{Difficulty, OrderMode, Variant};

/// Strictly Squares - N-in-a-row tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_squares")]
#[command(about = "Tic-tac-toe engine with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a computer-vs-computer match and print the result
    Simulate {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Board preset (overrides config)
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Turn order (overrides config)
        #[arg(long, value_enum)]
        order: Option<OrderMode>,

        /// Heuristic depth (overrides config)
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Random seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Round cap (overrides config)
        #[arg(long)]
        rounds: Option<u32>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print base-line and win-line counts for a board
    Lines {
        /// Board preset
        #[arg(long, value_enum, default_value = "five-squares")]
        variant: Variant,

        /// List every win line
        #[arg(long)]
        verbose: bool,
    },
}
