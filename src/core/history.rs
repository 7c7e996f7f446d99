//! Move records and the append/pop-only move history.
//!
//! The history doubles as the turn record: insertion order is placement
//! order, and the turn holder is always derivable from its length relative
//! to the round's starting player.
//!
//! Backed by `im::Vector` so `snapshot()` is O(1) — a collaborator can
//! poll the full history every frame without copying move records.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Coord;
use super::player::Player;

/// An immutable record of one placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Who placed.
    pub player: Player,
    /// Where.
    pub coord: Coord,
    /// 1-based placement order across the whole round.
    pub sequence: u32,
}

impl Move {
    /// Create a move record.
    #[must_use]
    pub fn new(player: Player, coord: Coord, sequence: u32) -> Self {
        Self {
            player,
            coord,
            sequence,
        }
    }
}

/// Ordered, append/pop-only sequence of moves (a stack).
///
/// Sequence numbers of contained moves are strictly increasing and
/// contiguous starting at 1; `next_sequence` hands out the number the
/// next push must carry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vector<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when no moves have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The sequence number the next pushed move must carry.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        debug_assert_eq!(mv.sequence, self.next_sequence());
        self.moves.push_back(mv);
    }

    /// Pop the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_back()
    }

    /// The most recent move without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.back()
    }

    /// Iterate over moves in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// The last `k` moves in placement order (fewer if the history is
    /// shorter). Bounded feed for a recent-moves display.
    #[must_use]
    pub fn recent(&self, k: usize) -> Vec<Move> {
        let skip = self.moves.len().saturating_sub(k);
        self.moves.iter().skip(skip).copied().collect()
    }

    /// O(1) snapshot of the full history.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Move> {
        self.moves.clone()
    }
}
