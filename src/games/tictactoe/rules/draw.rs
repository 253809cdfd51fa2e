//! Draw detection and round outcome.

use super::super::{Board, Outcome};
use tracing::instrument;

impl Board {
    /// True when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.unoccupied().next().is_none()
    }

    /// Classifies the board: a win beats a full board.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Win(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }
}
