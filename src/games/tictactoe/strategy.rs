//! Heuristic move selection for the computer opponent.
//!
//! Steps are tried in a fixed order and the first one that yields a square
//! wins:
//!
//! 1. the centre, if empty
//! 2. complete one of our own lines
//! 3. block the opponent's line
//! 4. extend our strongest uncontested line
//! 5. any empty square, uniformly at random

use super::{Board, Coord, Mark};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How many heuristic steps the computer uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Centre, win, block, random. No line building.
    Classic,
    /// All five steps.
    #[default]
    Full,
}

/// Which heuristic step produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Reason {
    /// Took the empty centre.
    Center,
    /// Completed a line.
    Win,
    /// Blocked the opponent.
    Block,
    /// Extended the best uncontested line.
    Build,
    /// Nothing better; picked at random.
    Random,
}

/// Picks a square for `own`, or `None` if the board is full.
#[instrument(skip(board, rng), fields(mark = %own))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Coord> {
    select_move_with_reason(board, own, difficulty, rng).map(|(coord, _)| coord)
}

/// Like [`select_move`] but also reports which step fired.
#[instrument(skip(board, rng), fields(mark = %own))]
pub fn select_move_with_reason<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(Coord, Reason)> {
    let choice = board
        .center()
        .filter(|&center| board.is_empty(center))
        .map(|center| (center, Reason::Center))
        .or_else(|| {
            board
                .find_decisive_line(own)
                .and_then(|line| board.first_empty_in(line))
                .map(|coord| (coord, Reason::Win))
        })
        .or_else(|| {
            board
                .find_decisive_line(own.opponent())
                .and_then(|line| board.first_empty_in(line))
                .map(|coord| (coord, Reason::Block))
        })
        .or_else(|| {
            (difficulty == Difficulty::Full)
                .then(|| board.find_best_offensive_line(own))
                .flatten()
                .and_then(|line| board.first_empty_in(line))
                .map(|coord| (coord, Reason::Build))
        })
        .or_else(|| {
            board
                .unoccupied()
                .choose(rng)
                .map(|coord| (coord, Reason::Random))
        });

    if let Some((coord, reason)) = choice {
        debug!(coord = %coord, reason = %reason, "Computer selected move");
    }
    choice
}
