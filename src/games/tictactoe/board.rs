//! Grid storage and placement.

use super::coord::Coord;
use super::error::BoardError;
use super::layout::{Layout, WinLine};
use super::types::{Mark, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// An N×N board with its precomputed winning lines.
///
/// Placement and evaluation are separate steps: [`Board::place`] only
/// writes a square, callers ask [`Board::outcome`] afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    layout: Layout,
    /// Squares in row-major order.
    squares: Vec<Square>,
    /// Fixed for the lifetime of the board.
    lines: Vec<WinLine>,
}

impl Board {
    /// Creates an empty board for the given layout.
    #[instrument]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            squares: vec![Square::Empty; layout.area()],
            lines: layout.win_lines(),
        }
    }

    /// Board geometry.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Every winning line, in enumeration order.
    pub fn lines(&self) -> &[WinLine] {
        &self.lines
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Gets the square at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        coord
            .within(*self.layout.size())
            .then(|| self.squares[coord.to_index(*self.layout.size())])
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Writes `mark` into an empty square.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinate` off the board, `CellOccupied` if the square is
    /// taken. A rejected placement leaves the board untouched.
    #[instrument(skip_all, fields(coord = %coord, mark = %mark))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), BoardError> {
        match self.get(coord) {
            None => Err(BoardError::InvalidCoordinate(coord.to_string())),
            Some(Square::Occupied(_)) => Err(BoardError::CellOccupied(coord)),
            Some(Square::Empty) => {
                let index = coord.to_index(*self.layout.size());
                self.squares[index] = Square::Occupied(mark);
                debug!("Placed mark");
                Ok(())
            }
        }
    }

    /// Parses untrusted text into a coordinate, then places.
    #[instrument(skip(self))]
    pub fn place_str(&mut self, input: &str, mark: Mark) -> Result<Coord, BoardError> {
        let coord = Coord::parse(input, *self.layout.size())?;
        self.place(coord, mark)?;
        Ok(coord)
    }

    /// Empty squares in row-major order, recomputed on every call.
    pub fn unoccupied(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = *self.layout.size();
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .map(move |(index, _)| Coord::from_index(index, size))
    }

    /// The centre square, when the board has one.
    pub fn center(&self) -> Option<Coord> {
        self.layout.center()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares grouped by row for renderers.
    pub fn snapshot(&self) -> Vec<Vec<Square>> {
        self.squares
            .chunks(*self.layout.size())
            .map(<[Square]>::to_vec)
            .collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|square| square.is(mark)).count()
    }

    /// Squares of `line` equal to `square`.
    pub(crate) fn count_in(&self, line: &WinLine, square: Square) -> usize {
        line.cells()
            .iter()
            .filter(|&&coord| self.get(coord) == Some(square))
            .count()
    }

    /// First empty square of `line`, in line order.
    pub fn first_empty_in(&self, line: &WinLine) -> Option<Coord> {
        line.cells().iter().copied().find(|&coord| self.is_empty(coord))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = *self.layout.size();
        write!(f, "  ")?;
        for col in 0..size {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        for (row, squares) in self.snapshot().iter().enumerate() {
            write!(f, "\n{:>2}", row + 1)?;
            for square in squares {
                write!(f, " {}", square.symbol())?;
            }
        }
        Ok(())
    }
}
