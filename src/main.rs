//! Strictly Squares - Unified CLI
//!
//! Headless front end for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_squares::{ComputerPlayer, GameSession, Layout, MatchConfig, Variant, assign_marks};
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            config,
            variant,
            order,
            difficulty,
            seed,
            rounds,
            json,
        } => {
            let mut match_config = match config {
                Some(path) => MatchConfig::from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => MatchConfig::default(),
            };
            if let Some(variant) = variant {
                match_config = match_config.with_variant(variant);
            }
            if let Some(order) = order {
                match_config = match_config.with_order(order);
            }
            if let Some(difficulty) = difficulty {
                match_config = match_config.with_difficulty(difficulty);
            }
            if seed.is_some() {
                match_config = match_config.with_seed(seed);
            }
            if let Some(rounds) = rounds {
                match_config = match_config.with_max_rounds(rounds);
            }
            run_simulation(&match_config, json)
        }
        Command::Lines { variant, verbose } => {
            print_lines(variant, verbose);
            Ok(())
        }
    }
}

/// Plays a computer-vs-computer match.
#[instrument(skip(config), fields(variant = %config.variant(), order = %config.order()))]
fn run_simulation(config: &MatchConfig, json: bool) -> Result<()> {
    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let (first_mark, second_mark) = assign_marks(&mut rng);
    let first = ComputerPlayer::with_random_name(
        first_mark,
        *config.difficulty(),
        StdRng::from_rng(&mut rng),
    );
    let second = ComputerPlayer::with_random_name(
        second_mark,
        *config.difficulty(),
        StdRng::from_rng(&mut rng),
    );

    let mut session = GameSession::new(config, Box::new(first), Box::new(second))?;
    let champion = session.play_to_champion()?;
    let summary = session.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}\n", session.board());
    let scores = summary.scoreboard();
    println!(
        "{} ({}): {} | {} ({}): {} | draws: {}",
        session.name_of(first_mark),
        first_mark,
        scores.points(first_mark),
        session.name_of(second_mark),
        second_mark,
        scores.points(second_mark),
        scores.draws()
    );
    match champion {
        Some(mark) => println!("And the champion is {}!", session.name_of(mark)),
        None => println!("No champion after {} rounds.", summary.rounds().len()),
    }
    Ok(())
}

/// Prints line counts for a preset.
#[instrument]
fn print_lines(variant: Variant, verbose: bool) {
    let layout: Layout = variant.layout();
    let lines = layout.win_lines();
    println!(
        "{}: {}x{}, {} in a row, {} base lines ({}), {} win lines",
        variant,
        layout.size(),
        layout.size(),
        layout.run(),
        layout.base_lines().len(),
        layout.order(),
        lines.len()
    );
    if verbose {
        for line in &lines {
            println!("  {}", line);
        }
    }
}

/// Logs to stderr so stdout stays clean for `--json`.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
