//! Strictly Squares - N-in-a-row tic-tac-toe engine
//!
//! This library provides the board, rules and computer opponent for
//! generalized tic-tac-toe, where `L` marks in a row win on an `N×N` board.
//!
//! # Architecture
//!
//! - **Games**: board storage, win-line enumeration, heuristic move choice
//!   and turn-order rotation
//! - **Players**: the `Player` trait with computer and scripted players
//! - **Session**: rounds, scores and the match champion
//! - **Config**: TOML-loadable match settings
//!
//! # Example
//!
//! ```
//! use strictly_squares::{Board, Coord, Layout, Mark, Outcome};
//!
//! let mut board = Board::new(Layout::classic());
//! for square in ["1", "5", "9"] {
//!     board.place_str(square, Mark::X).unwrap();
//! }
//! assert!(board.has_winner(Mark::X));
//! assert_eq!(board.outcome(), Outcome::Win(Mark::X));
//! assert_eq!(board.lines().len(), 8);
//! # let _ = Coord::new(0, 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{MatchConfig, WINNING_POINTS};

// Crate-level exports - Players
pub use players::{
    COMPUTER_NAMES, ComputerPlayer, Player, PlayerError, ScriptedPlayer, assign_marks,
};

// Crate-level exports - Session management
pub use session::{
    GameSession, MAX_REJECTED_MOVES, MatchError, MatchSummary, RoundRecord, Scoreboard,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, ConfigError, Coord, Difficulty, Layout, LineOrder, MAX_SIZE, MIN_DIAGONAL,
    Mark, Move, OrderMode, Outcome, Reason, Square, TurnOrder, Variant, WinLine, select_move,
    select_move_with_reason,
};
