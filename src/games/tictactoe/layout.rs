//! Board geometry and win-line enumeration.
//!
//! A layout is a square board of `size` columns and rows where `run`
//! marks in a row win. Winning lines are never written out by hand: each
//! base line (row, column or diagonal) is swept by a window of `run`
//! squares and every window position becomes one [`WinLine`].
//!
//! The order of the base lines matters: the computer heuristic breaks ties
//! by taking the first line found, so each preset keeps the order its
//! players know (see [`LineOrder`]).

use super::coord::Coord;
use super::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Diagonals shorter than this are not base lines.
pub const MIN_DIAGONAL: usize = 3;

/// Widest supported board; columns are named `A` to `Z`.
pub const MAX_SIZE: usize = 26;

/// Named board presets.
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
pub enum Variant {
    /// 3×3, three in a row.
    Classic,
    /// 5×5, four in a row.
    #[default]
    FiveSquares,
}

impl Variant {
    /// Layout for this preset.
    pub fn layout(self) -> Layout {
        match self {
            Variant::Classic => Layout::classic(),
            Variant::FiveSquares => Layout::five_squares(),
        }
    }
}

/// One candidate winning run of exactly `run` coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(Vec<Coord>);

impl WinLine {
    /// Coordinates in line order.
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// Number of squares in the line.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length line, which a layout never produces.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the line passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.0.iter().map(Coord::to_string).collect();
        write!(f, "[{}]", names.join(" "))
    }
}

/// Order in which [`Layout::base_lines`] lists rows, columns and diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineOrder {
    /// Rows, columns, down-right diagonals, then down-left diagonals.
    #[default]
    RowsFirst,
    /// The 5×5 diagonals in paired order (short ones first, each
    /// down-right diagonal followed by its mirror), then rows and columns.
    /// Only defined for a side of 5.
    DiagonalsFirst,
}

/// The 5×5 diagonals as `(col, row)` walks, in listing order.
const FIVE_SQUARE_DIAGONALS: [&[(usize, usize)]; 10] = [
    &[(0, 2), (1, 3), (2, 4)],
    &[(2, 4), (3, 3), (4, 2)],
    &[(0, 1), (1, 2), (2, 3), (3, 4)],
    &[(1, 4), (2, 3), (3, 2), (4, 1)],
    &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
    &[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)],
    &[(1, 0), (2, 1), (3, 2), (4, 3)],
    &[(0, 3), (1, 2), (2, 1), (3, 0)],
    &[(2, 0), (3, 1), (4, 2)],
    &[(0, 2), (1, 1), (2, 0)],
];

/// Board geometry: width, the run length needed to win, and line order.
///
/// Deserialization goes through [`Layout::with_order`], so a decoded
/// layout always satisfies the same checks as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields")]
pub struct Layout {
    /// Squares per side.
    size: usize,
    /// Marks in a row needed to win.
    run: usize,
    /// Base-line enumeration order.
    order: LineOrder,
}

/// Unchecked wire form of [`Layout`].
#[derive(Deserialize)]
struct LayoutFields {
    size: usize,
    run: usize,
    #[serde(default)]
    order: LineOrder,
}

impl TryFrom<LayoutFields> for Layout {
    type Error = ConfigError;

    fn try_from(fields: LayoutFields) -> Result<Self, Self::Error> {
        Self::with_order(fields.size, fields.run, fields.order)
    }
}

impl Layout {
    /// Creates a layout with rows listed first, rejecting impossible geometry.
    pub fn new(size: usize, run: usize) -> Result<Self, ConfigError> {
        Self::with_order(size, run, LineOrder::RowsFirst)
    }

    /// Creates a layout with an explicit base-line order.
    #[instrument]
    pub fn with_order(size: usize, run: usize, order: LineOrder) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "board size must be between 1 and {}, got {}",
                MAX_SIZE, size
            )));
        }
        if run == 0 || run > size {
            return Err(ConfigError::new(format!(
                "run length must be between 1 and {}, got {}",
                size, run
            )));
        }
        if order == LineOrder::DiagonalsFirst && size != 5 {
            return Err(ConfigError::new(format!(
                "line order {} needs a 5x5 board, got {}x{}",
                order, size, size
            )));
        }
        Ok(Self { size, run, order })
    }

    /// The 3×3 board, three in a row.
    pub fn classic() -> Self {
        Self {
            size: 3,
            run: 3,
            order: LineOrder::RowsFirst,
        }
    }

    /// The 5×5 board, four in a row, diagonals listed first.
    pub fn five_squares() -> Self {
        Self {
            size: 5,
            run: 4,
            order: LineOrder::DiagonalsFirst,
        }
    }

    /// Total number of squares.
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// The unique centre square, present only when the side is odd.
    pub fn center(&self) -> Option<Coord> {
        (self.size % 2 == 1).then(|| Coord::new(self.size / 2, self.size / 2))
    }

    /// Every square in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.area()).map(|index| Coord::from_index(index, self.size))
    }

    /// Full rows, columns and diagonals of at least [`MIN_DIAGONAL`]
    /// squares, in this layout's [`LineOrder`].
    #[instrument]
    pub fn base_lines(&self) -> Vec<Vec<Coord>> {
        let mut lines = Vec::new();
        match self.order {
            LineOrder::RowsFirst => {
                lines.extend(self.rows());
                lines.extend(self.columns());
                lines.extend(self.diagonals());
            }
            LineOrder::DiagonalsFirst => {
                lines.extend(FIVE_SQUARE_DIAGONALS.iter().map(|walk| {
                    walk.iter()
                        .map(|&(col, row)| Coord::new(col, row))
                        .collect::<Vec<_>>()
                }));
                lines.extend(self.rows());
                lines.extend(self.columns());
            }
        }
        lines
    }

    fn rows(&self) -> impl Iterator<Item = Vec<Coord>> + '_ {
        (0..self.size).map(|row| (0..self.size).map(|col| Coord::new(col, row)).collect::<Vec<_>>())
    }

    fn columns(&self) -> impl Iterator<Item = Vec<Coord>> + '_ {
        (0..self.size).map(|col| (0..self.size).map(|row| Coord::new(col, row)).collect::<Vec<_>>())
    }

    /// Down-right diagonals, then down-left ones.
    fn diagonals(&self) -> Vec<Vec<Coord>> {
        let n = self.size;
        let mut lines = Vec::new();

        // Down-right: col - row is constant.
        for offset in 0..(2 * n - 1) {
            let (col0, row0) = if offset < n {
                (0, n - 1 - offset)
            } else {
                (offset - (n - 1), 0)
            };
            let line: Vec<Coord> = (0..n)
                .map(|step| (col0 + step, row0 + step))
                .take_while(|&(col, row)| col < n && row < n)
                .map(|(col, row)| Coord::new(col, row))
                .collect();
            if line.len() >= MIN_DIAGONAL {
                lines.push(line);
            }
        }

        // Down-left: col + row is constant.
        for sum in 0..(2 * n - 1) {
            let line: Vec<Coord> = (0..n)
                .filter(|&row| sum >= row && sum - row < n)
                .map(|row| Coord::new(sum - row, row))
                .collect();
            if line.len() >= MIN_DIAGONAL {
                lines.push(line);
            }
        }

        lines
    }

    /// Slides a window of `run` squares over every base line.
    ///
    /// The result has Σ max(0, len − run + 1) lines, ordered by base line
    /// and then by window offset.
    #[instrument]
    pub fn win_lines(&self) -> Vec<WinLine> {
        let lines: Vec<WinLine> = self
            .base_lines()
            .iter()
            .flat_map(|base| base.windows(self.run).map(|w| WinLine(w.to_vec())))
            .collect();
        debug!(size = self.size, run = self.run, count = lines.len(), "Enumerated win lines");
        lines
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::five_squares()
    }
}
