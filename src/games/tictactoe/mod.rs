//! Generalized N-in-a-row tic-tac-toe.

mod action;
mod board;
mod coord;
mod error;
mod layout;
mod rules;
mod strategy;
mod turn_order;
mod types;

pub use action::Move;
pub use board::Board;
pub use coord::Coord;
pub use error::{BoardError, ConfigError};
pub use layout::{Layout, LineOrder, MAX_SIZE, MIN_DIAGONAL, Variant, WinLine};
pub use strategy::{Difficulty, Reason, select_move, select_move_with_reason};
pub use turn_order::{OrderMode, TurnOrder};
pub use types::{Mark, Outcome, Square};
