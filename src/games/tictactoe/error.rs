//! Error types for board and configuration failures.

use super::coord::Coord;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when a placement is rejected.
///
/// Both variants are recoverable: the caller re-asks for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The coordinate does not name a square on this board.
    #[display("Invalid coordinate: {}", _0)]
    InvalidCoordinate(#[error(not(source))] String),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Coord),
}

/// Configuration error with caller location tracking.
///
/// Raised for programmer errors such as an impossible layout, an unknown
/// order mode or a turn order that was never started.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid configuration: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_records_location() {
        let err = ConfigError::new("bad layout");
        assert_eq!(err.file, file!());
        assert!(err.to_string().contains("bad layout"));
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::CellOccupied(Coord::new(2, 2));
        assert_eq!(err.to_string(), "Square C3 is already occupied");
    }
}
