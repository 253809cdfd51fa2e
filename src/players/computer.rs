//! Computer opponent driven by the line heuristic.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Coord, Difficulty, Mark, select_move_with_reason};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument};

/// Names a computer picks from when none is given.
pub const COMPUTER_NAMES: [&str; 4] = ["Big Boss", "Thanos", "Darth Vador", "Alien"];

/// Computer player; owns its random source so tests can seed it.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R> {
    name: String,
    mark: Mark,
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a named computer player.
    pub fn new(name: impl Into<String>, mark: Mark, difficulty: Difficulty, rng: R) -> Self {
        let name = name.into();
        info!(computer = %name, mark = %mark, difficulty = %difficulty, "Creating computer player");
        Self {
            name,
            mark,
            difficulty,
            rng,
        }
    }

    /// Creates a computer player with a name drawn from [`COMPUTER_NAMES`].
    pub fn with_random_name(mark: Mark, difficulty: Difficulty, mut rng: R) -> Self {
        let name = COMPUTER_NAMES
            .choose(&mut rng)
            .copied()
            .unwrap_or(COMPUTER_NAMES[0]);
        Self::new(name, mark, difficulty, rng)
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    #[instrument(skip(self, board), fields(computer = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        let (coord, reason) =
            select_move_with_reason(board, self.mark, self.difficulty, &mut self.rng)
                .ok_or_else(|| PlayerError::BoardFull(self.name.clone()))?;
        debug!(coord = %coord, reason = %reason, "Computer chose square");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
