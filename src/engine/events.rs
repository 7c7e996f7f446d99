//! Structured results handed to the presentation collaborator.
//!
//! The engine never touches presentation; instead every state-changing
//! operation returns one of these events describing exactly what changed,
//! and rejected operations return nothing at all (`None` at the call
//! site — an illegal click produces no effect and no event).

use serde::{Deserialize, Serialize};

use crate::core::{Move, Player};
use crate::rules::WinningLine;

/// Result of a `reset`: the board is cleared and this player moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetEvent {
    /// Starting player of the fresh round.
    pub starter: Player,
}

/// Result of an accepted placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// The round continues; the turn has advanced.
    Placed {
        mv: Move,
        next_turn: Player,
    },
    /// The placement completed a winning line. The turn does not advance.
    Won {
        mv: Move,
        /// Full contiguous run for highlighting (>= 5 cells).
        line: WinningLine,
        /// The winner's updated session win count.
        wins: u32,
    },
    /// The placement filled the last cell with no winner.
    Drawn {
        mv: Move,
    },
}

impl PlaceOutcome {
    /// The move this outcome describes.
    #[must_use]
    pub fn mv(&self) -> &Move {
        match self {
            PlaceOutcome::Placed { mv, .. }
            | PlaceOutcome::Won { mv, .. }
            | PlaceOutcome::Drawn { mv } => mv,
        }
    }

    /// True when the placement concluded the round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PlaceOutcome::Placed { .. })
    }
}

/// Result of an accepted undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEvent {
    /// The move that was taken back; its cell is now vacant.
    pub mv: Move,
    /// Whose turn it is now. Always the undone move's player: they get to
    /// choose a different move instead.
    pub turn: Player,
    /// True when the undone move was the one that had won the round; the
    /// winner's tally has been decremented and any winning-line highlight
    /// must be cleared.
    pub forfeited_win: bool,
}
