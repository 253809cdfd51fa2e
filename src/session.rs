//! Match sessions: rounds played between two players, with a scoreboard.

use crate::config::MatchConfig;
use crate::games::tictactoe::{
    Board, BoardError, ConfigError, Coord, Mark, Move, Outcome, TurnOrder,
};
use crate::players::{Player, PlayerError};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, error, info, instrument, warn};

/// Rejected placements in a row before a player is given up on.
pub const MAX_REJECTED_MOVES: usize = 10;

/// Error that ends a match early.
#[derive(Debug, Clone, Display, Error, From)]
pub enum MatchError {
    /// A player could not produce a move.
    #[display("Player error: {}", _0)]
    Player(PlayerError),
    /// A player kept choosing squares the board rejects.
    #[display("Board error: {}", _0)]
    Board(BoardError),
    /// The session was set up wrongly.
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Round wins per mark, plus draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds drawn.
    draws: u32,
}

impl Scoreboard {
    /// Points held by `mark`.
    pub fn points(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x += 1,
            Outcome::Win(Mark::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

/// What happened in one round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct RoundRecord {
    /// Mark that moved first.
    leader: Mark,
    /// How the round ended.
    outcome: Outcome,
    /// Every placement, in order.
    moves: Vec<Move>,
}

/// Serializable end-of-match report.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSummary {
    /// First mark to reach the winning points, if any.
    champion: Option<Mark>,
    /// Final score.
    scoreboard: Scoreboard,
    /// Round-by-round history.
    rounds: Vec<RoundRecord>,
}

/// One board, one turn order and two players, owned for a whole match.
pub struct GameSession {
    board: Board,
    order: TurnOrder,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
    scoreboard: Scoreboard,
    history: Vec<RoundRecord>,
    winning_points: u32,
    max_rounds: u32,
}

impl GameSession {
    /// Creates a session; `first` takes the human seat in the turn order.
    ///
    /// # Errors
    ///
    /// Fails if both players hold the same mark.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(
        config: &MatchConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        let order = TurnOrder::configure(*config.order(), first.mark(), second.mark())?;
        info!(variant = %config.variant(), order = %config.order(), "Creating game session");

        Ok(Self {
            board: Board::new(config.layout()),
            order,
            first,
            second,
            scoreboard: Scoreboard::default(),
            history: Vec::new(),
            winning_points: *config.winning_points(),
            max_rounds: *config.max_rounds(),
        })
    }

    /// The board as left by the last move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Rounds played so far.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Name of the player holding `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        if self.first.mark() == mark {
            self.first.name()
        } else {
            self.second.name()
        }
    }

    /// Plays one round from an empty board to a win or draw.
    #[instrument(skip(self), fields(round = self.history.len() + 1))]
    pub fn play_round(&mut self) -> Result<Outcome, MatchError> {
        self.board.reset();
        let leader = self.order.start_round();
        let mut current = leader;
        let mut moves = Vec::new();

        let outcome = loop {
            let coord = self.place_for(current)?;
            moves.push(Move::new(current, coord));

            let outcome = self.board.outcome();
            if outcome.is_terminal() {
                break outcome;
            }
            current = self.order.advance()?;
        };

        self.scoreboard.record(outcome);
        info!(outcome = %outcome, moves = moves.len(), "Round finished");
        self.history.push(RoundRecord::new(leader, outcome, moves));
        Ok(outcome)
    }

    /// Asks the player holding `mark` for squares until one is accepted.
    ///
    /// Invalid or occupied squares are logged and the same player is asked
    /// again; only after [`MAX_REJECTED_MOVES`] rejections in a row does the
    /// last board error end the round.
    fn place_for(&mut self, mark: Mark) -> Result<Coord, MatchError> {
        let player = if self.first.mark() == mark {
            &mut self.first
        } else {
            &mut self.second
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            let coord = player.choose_move(&self.board)?;
            match self.board.place(coord, mark) {
                Ok(()) => {
                    debug!(player = %player.name(), coord = %coord, attempt, "Move played");
                    return Ok(coord);
                }
                Err(e) => {
                    warn!(
                        player = %player.name(),
                        error = %e,
                        attempt,
                        max_attempts = MAX_REJECTED_MOVES,
                        "Move rejected, asking again"
                    );
                    if attempt >= MAX_REJECTED_MOVES {
                        error!(
                            player = %player.name(),
                            attempts = attempt,
                            "Too many rejected moves"
                        );
                        return Err(e.into());
                    }
                }
            }
        }
    }

    /// First mark to reach the winning points.
    pub fn champion(&self) -> Option<Mark> {
        Mark::iter().find(|&mark| self.scoreboard.points(mark) >= self.winning_points)
    }

    /// Plays rounds until someone is champion or the round cap is hit.
    #[instrument(skip(self))]
    pub fn play_to_champion(&mut self) -> Result<Option<Mark>, MatchError> {
        while self.champion().is_none() {
            if self.history.len() as u32 >= self.max_rounds {
                warn!(max_rounds = self.max_rounds, "Round cap reached without a champion");
                return Ok(None);
            }
            self.play_round()?;
        }
        let champion = self.champion();
        if let Some(mark) = champion {
            info!(champion = %self.name_of(mark), mark = %mark, "Match won");
        }
        Ok(champion)
    }

    /// Clears scores and history; the turn order keeps rotating.
    pub fn reset_scores(&mut self) {
        self.scoreboard = Scoreboard::default();
        self.history.clear();
    }

    /// Snapshot of the match so far.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            champion: self.champion(),
            scoreboard: self.scoreboard,
            rounds: self.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{OrderMode, Variant};
    use crate::players::ScriptedPlayer;
    use std::collections::VecDeque;

    /// Returns squares as given, without checking them against the board.
    struct Blind {
        mark: Mark,
        coords: VecDeque<Coord>,
    }

    impl Blind {
        fn new(mark: Mark, coords: impl IntoIterator<Item = Coord>) -> Self {
            Self {
                mark,
                coords: coords.into_iter().collect(),
            }
        }
    }

    impl Player for Blind {
        fn choose_move(&mut self, _board: &Board) -> Result<Coord, PlayerError> {
            self.coords
                .pop_front()
                .ok_or_else(|| PlayerError::OutOfMoves("Blind".to_string()))
        }

        fn name(&self) -> &str {
            "Blind"
        }

        fn mark(&self) -> Mark {
            self.mark
        }
    }

    fn classic(order: OrderMode) -> MatchConfig {
        MatchConfig::default()
            .with_variant(Variant::Classic)
            .with_order(order)
            .with_winning_points(1)
    }

    #[test]
    fn test_scripted_diagonal_win() {
        let human = ScriptedPlayer::new("Ada", Mark::X, ["1", "5", "9"]);
        let other = ScriptedPlayer::new("Bob", Mark::O, ["2", "3"]);
        let mut session =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other))
                .unwrap();

        assert_eq!(session.play_round().unwrap(), Outcome::Win(Mark::X));
        assert_eq!(session.champion(), Some(Mark::X));
        assert_eq!(session.history()[0].moves().len(), 5);
        assert_eq!(*session.history()[0].leader(), Mark::X);
    }

    #[test]
    fn test_scripted_draw() {
        // X O X / O X X / O X O
        let human = ScriptedPlayer::new("Ada", Mark::X, ["1", "3", "5", "6", "8"]);
        let other = ScriptedPlayer::new("Bob", Mark::O, ["2", "4", "7", "9"]);
        let mut session =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other))
                .unwrap();

        assert_eq!(session.play_round().unwrap(), Outcome::Draw);
        assert_eq!(*session.scoreboard().draws(), 1);
        assert_eq!(session.champion(), None);
    }

    #[test]
    fn test_computer_first_leads() {
        let human = ScriptedPlayer::new("Ada", Mark::X, ["1", "2", "3", "4"]);
        let other = ScriptedPlayer::new("Bob", Mark::O, ["5", "9", "7", "8"]);
        let mut session =
            GameSession::new(&classic(OrderMode::ComputerFirst), Box::new(human), Box::new(other))
                .unwrap();

        session.play_round().unwrap();
        assert_eq!(*session.history()[0].leader(), Mark::O);
        assert_eq!(session.history()[0].moves()[0], Move::new(Mark::O, Coord::new(1, 1)));
    }

    #[test]
    fn test_exhausted_player_is_error() {
        let human = ScriptedPlayer::new("Ada", Mark::X, ["1"]);
        let other = ScriptedPlayer::new("Bob", Mark::O, ["2"]);
        let mut session =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other))
                .unwrap();

        assert!(matches!(
            session.play_round(),
            Err(MatchError::Player(PlayerError::OutOfMoves(_)))
        ));
    }

    #[test]
    fn test_rejected_square_asks_same_player_again() {
        // B2 is taken when X offers it, so X is asked again and plays B1.
        let human = Blind::new(
            Mark::X,
            [Coord::new(0, 0), Coord::new(1, 1), Coord::new(1, 0), Coord::new(2, 0)],
        );
        let other = ScriptedPlayer::new("Bob", Mark::O, ["5", "9"]);
        let mut session =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other))
                .unwrap();

        assert_eq!(session.play_round().unwrap(), Outcome::Win(Mark::X));
        assert_eq!(*session.scoreboard().x(), 1);
        let moves = session.history()[0].moves();
        assert_eq!(moves.len(), 5);
        assert_eq!(moves[2], Move::new(Mark::X, Coord::new(1, 0)));
        assert_eq!(session.champion(), Some(Mark::X));
    }

    #[test]
    fn test_off_board_square_asks_again() {
        let human = Blind::new(
            Mark::X,
            [Coord::new(7, 7), Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
        );
        let other = ScriptedPlayer::new("Bob", Mark::O, ["5", "9"]);
        let mut session =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other))
                .unwrap();

        assert_eq!(session.play_round().unwrap(), Outcome::Win(Mark::X));
        assert_eq!(session.history()[0].moves()[0].coord, Coord::new(0, 0));
    }

    #[test]
    fn test_endless_rejections_end_round() {
        let human = Blind::new(Mark::X, vec![Coord::new(9, 9); MAX_REJECTED_MOVES]);
        let other = ScriptedPlayer::new("Bob", Mark::O, ["5"]);
        let mut session =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other))
                .unwrap();

        assert!(matches!(
            session.play_round(),
            Err(MatchError::Board(BoardError::InvalidCoordinate(_)))
        ));
        assert!(session.history().is_empty());
        assert_eq!(*session.scoreboard(), Scoreboard::default());
    }

    #[test]
    fn test_same_marks_rejected() {
        let human = ScriptedPlayer::new("Ada", Mark::X, Vec::<String>::new());
        let other = ScriptedPlayer::new("Bob", Mark::X, Vec::<String>::new());
        let result =
            GameSession::new(&classic(OrderMode::HumanFirst), Box::new(human), Box::new(other));
        assert!(matches!(result, Err(MatchError::Config(_))));
    }
}
