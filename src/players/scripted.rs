//! Player fed from a queue of typed coordinates.
//!
//! Stands in for the interactive input source: every entry is untrusted
//! and checked against the current board before it is used.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, BoardError, Coord, Mark};
use std::collections::VecDeque;
use tracing::{info, instrument, warn};

/// Replays coordinate strings, skipping any the board would reject.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    mark: Mark,
    inputs: VecDeque<String>,
}

impl ScriptedPlayer {
    /// Creates a scripted player from raw input lines.
    pub fn new<I, S>(name: impl Into<String>, mark: Mark, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let inputs: VecDeque<String> = inputs.into_iter().map(Into::into).collect();
        info!(player = %name, queued = inputs.len(), "Creating scripted player");
        Self { name, mark, inputs }
    }

    /// Number of unread inputs.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Player for ScriptedPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        while let Some(input) = self.inputs.pop_front() {
            let checked = Coord::parse(&input, *board.layout().size()).and_then(|coord| {
                if board.is_empty(coord) {
                    Ok(coord)
                } else {
                    Err(BoardError::CellOccupied(coord))
                }
            });
            match checked {
                Ok(coord) => return Ok(coord),
                Err(e) => warn!(input = %input, error = %e, "Rejected input, reading next"),
            }
        }
        Err(PlayerError::OutOfMoves(self.name.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
