//! Game rules: round status and victory detection.

pub mod win;

pub use win::{find_winning_line, WinningLine, DIRECTIONS};

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// The status of the current round.
///
/// At most one terminal variant holds at a time; once the status leaves
/// `InProgress`, the engine accepts no further placements until a reset
/// or an undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    InProgress,
    /// A player completed a five-or-more run.
    Won {
        winner: Player,
        line: WinningLine,
    },
    /// All cells filled with no winner.
    Drawn,
}

impl GameStatus {
    /// True while moves are still accepted.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the round concluded with one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// The winning line, if the round concluded with one.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}
