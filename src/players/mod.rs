//! Player trait and implementations.

mod computer;
mod scripted;

pub use computer::{COMPUTER_NAMES, ComputerPlayer};
pub use scripted::ScriptedPlayer;

use crate::games::tictactoe::{Board, BoardError, Coord, Mark};
use derive_more::{Display, Error, From};
use rand::Rng;
use rand::seq::IteratorRandom;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Something that can pick a square when it is its turn.
pub trait Player {
    /// Chooses an empty square on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<Coord, PlayerError>;

    /// The player's display name.
    fn name(&self) -> &str;

    /// The mark this player places.
    fn mark(&self) -> Mark;
}

/// Error raised when a player cannot produce a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum PlayerError {
    /// The board rejected a coordinate.
    #[display("{}", _0)]
    Board(BoardError),

    /// A scripted player ran out of input.
    #[display("{} has no moves left", _0)]
    #[from(skip)]
    OutOfMoves(#[error(not(source))] String),

    /// There was no empty square to choose.
    #[display("No empty square left for {}", _0)]
    #[from(skip)]
    BoardFull(#[error(not(source))] String),
}

/// Randomly decides which mark the human gets; the computer gets the other.
#[instrument(skip(rng))]
pub fn assign_marks<R: Rng + ?Sized>(rng: &mut R) -> (Mark, Mark) {
    let human = Mark::iter().choose(rng).unwrap_or(Mark::X);
    (human, human.opponent())
}
