//! Win detection and line queries used by the computer opponent.

use super::super::{Board, Mark, Square, WinLine};
use strum::IntoEnumIterator;
use tracing::instrument;

impl Board {
    /// True if some winning line is entirely `mark`.
    #[instrument(skip(self))]
    pub fn has_winner(&self, mark: Mark) -> bool {
        let run = *self.layout().run();
        self.lines()
            .iter()
            .any(|line| self.count_in(line, Square::Occupied(mark)) == run)
    }

    /// The winning mark, checking X before O.
    pub fn winner(&self) -> Option<Mark> {
        Mark::iter().find(|&mark| self.has_winner(mark))
    }

    /// First line one `mark` short of completion with an empty square left.
    ///
    /// Used both to take a win and, with the opponent's mark, to block one.
    #[instrument(skip(self))]
    pub fn find_decisive_line(&self, mark: Mark) -> Option<&WinLine> {
        let run = *self.layout().run();
        self.lines().iter().find(|line| {
            self.count_in(line, Square::Occupied(mark)) == run - 1
                && self.count_in(line, Square::Empty) >= 1
        })
    }

    /// Line with the most `mark` squares that the opponent has not touched.
    ///
    /// A candidate needs at least one `mark` and one empty square. Ties go
    /// to the line enumerated first.
    #[instrument(skip(self))]
    pub fn find_best_offensive_line(&self, mark: Mark) -> Option<&WinLine> {
        let mut best: Option<(&WinLine, usize)> = None;

        for line in self.lines() {
            let own = self.count_in(line, Square::Occupied(mark));
            let theirs = self.count_in(line, Square::Occupied(mark.opponent()));
            let empty = self.count_in(line, Square::Empty);
            if own == 0 || empty == 0 || theirs > 0 {
                continue;
            }
            // Strictly greater keeps the earliest line on ties.
            if best.is_none_or(|(_, most)| own > most) {
                best = Some((line, own));
            }
        }

        best.map(|(line, _)| line)
    }
}
