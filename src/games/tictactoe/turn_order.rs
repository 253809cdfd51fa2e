//! Turn rotation between the human and computer marks.
//!
//! A turn order holds one or two fixed two-mark sequences. Each round
//! picks the next sequence and cycles through it until the round ends.

use super::Mark;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Who leads each round.
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
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OrderMode {
    /// The human leads every round.
    #[default]
    HumanFirst,
    /// The computer leads every round.
    ComputerFirst,
    /// Leaders swap every round, computer first.
    Alternating,
}

impl FromStr for OrderMode {
    type Err = ConfigError;

    /// Accepts the kebab-case name or the menu number `1`, `2` or `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "human-first" => Ok(OrderMode::HumanFirst),
            "2" | "computer-first" => Ok(OrderMode::ComputerFirst),
            "3" | "alternating" => Ok(OrderMode::Alternating),
            other => Err(ConfigError::new(format!("unknown order mode '{}'", other))),
        }
    }
}

/// Restartable rotation of two marks.
///
/// Starts uninitialized; [`TurnOrder::start_round`] must be called at the
/// beginning of every round, the first included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOrder {
    mode: OrderMode,
    sequences: Vec<[Mark; 2]>,
    /// Index into `sequences`; `None` until the first round starts.
    round: Option<usize>,
    /// Index into the active sequence.
    turn: usize,
}

impl TurnOrder {
    /// Sets up the rotation for a session.
    ///
    /// # Errors
    ///
    /// Fails if both players were given the same mark.
    #[instrument]
    pub fn configure(mode: OrderMode, human: Mark, computer: Mark) -> Result<Self, ConfigError> {
        if human == computer {
            return Err(ConfigError::new(format!(
                "human and computer cannot share mark {}",
                human
            )));
        }

        let sequences = match mode {
            OrderMode::HumanFirst => vec![[human, computer]],
            OrderMode::ComputerFirst => vec![[computer, human]],
            OrderMode::Alternating => vec![[computer, human], [human, computer]],
        };

        Ok(Self {
            mode,
            sequences,
            round: None,
            turn: 0,
        })
    }

    /// The configured mode.
    pub fn mode(&self) -> OrderMode {
        self.mode
    }

    /// Rewinds to the head of the next round's sequence and returns its
    /// leader.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn start_round(&mut self) -> Mark {
        let next = self
            .round
            .map_or(0, |round| (round + 1) % self.sequences.len());
        self.round = Some(next);
        self.turn = 0;
        let leader = self.sequences[next][0];
        debug!(leader = %leader, "Round started");
        leader
    }

    /// Moves to the next mark within the round.
    ///
    /// # Errors
    ///
    /// Fails if no round has been started.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<Mark, ConfigError> {
        let round = self
            .round
            .ok_or_else(|| ConfigError::new("advance called before start_round"))?;
        self.turn = (self.turn + 1) % 2;
        Ok(self.sequences[round][self.turn])
    }

    /// Whose turn it is, or `None` before the first round.
    pub fn current(&self) -> Option<Mark> {
        self.round.map(|round| self.sequences[round][self.turn])
    }

    /// True once a round has been started.
    pub fn is_active(&self) -> bool {
        self.round.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HUMAN: Mark = Mark::X;
    const COMPUTER: Mark = Mark::O;

    #[test]
    fn test_human_first_every_round() {
        let mut order = TurnOrder::configure(OrderMode::HumanFirst, HUMAN, COMPUTER).unwrap();
        for _ in 0..4 {
            assert_eq!(order.start_round(), HUMAN);
        }
    }

    #[test]
    fn test_computer_first_every_round() {
        let mut order = TurnOrder::configure(OrderMode::ComputerFirst, HUMAN, COMPUTER).unwrap();
        assert_eq!(order.start_round(), COMPUTER);
        order.advance().unwrap();
        assert_eq!(order.start_round(), COMPUTER);
    }

    #[test]
    fn test_alternating_swaps_leader() {
        let mut order = TurnOrder::configure(OrderMode::Alternating, HUMAN, COMPUTER).unwrap();
        let leaders: Vec<Mark> = (0..4).map(|_| order.start_round()).collect();
        assert_eq!(leaders, vec![COMPUTER, HUMAN, COMPUTER, HUMAN]);
    }

    #[test]
    fn test_advance_cycles_within_round() {
        let mut order = TurnOrder::configure(OrderMode::HumanFirst, HUMAN, COMPUTER).unwrap();
        order.start_round();
        let turns: Vec<Mark> = (0..5).map(|_| order.advance().unwrap()).collect();
        assert_eq!(turns, vec![COMPUTER, HUMAN, COMPUTER, HUMAN, COMPUTER]);
    }

    #[test]
    fn test_start_round_rewinds_mid_round() {
        let mut order = TurnOrder::configure(OrderMode::HumanFirst, HUMAN, COMPUTER).unwrap();
        order.start_round();
        order.advance().unwrap();
        assert_eq!(order.current(), Some(COMPUTER));
        assert_eq!(order.start_round(), HUMAN);
        assert_eq!(order.current(), Some(HUMAN));
    }

    #[test]
    fn test_uninitialized_rejects_advance() {
        let mut order = TurnOrder::configure(OrderMode::Alternating, HUMAN, COMPUTER).unwrap();
        assert!(!order.is_active());
        assert_eq!(order.current(), None);
        assert!(order.advance().is_err());
    }

    #[test]
    fn test_same_mark_rejected() {
        assert!(TurnOrder::configure(OrderMode::HumanFirst, Mark::X, Mark::X).is_err());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("1".parse::<OrderMode>().unwrap(), OrderMode::HumanFirst);
        assert_eq!("Computer-First".parse::<OrderMode>().unwrap(), OrderMode::ComputerFirst);
        assert_eq!("3".parse::<OrderMode>().unwrap(), OrderMode::Alternating);
        assert!("4".parse::<OrderMode>().is_err());
        assert!("sometimes".parse::<OrderMode>().is_err());
    }
}
