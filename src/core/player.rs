//! Player identity and per-player win tallies.
//!
//! ## Player
//!
//! Gomoku is strictly two-player. Each player carries a nonzero numeric id
//! (+1 / -1) that is part of the core contract: it is the value stored in
//! occupied board cells and the value the turn pointer refers to. Display
//! labels are provided for logs and debugging; colors, accents, and other
//! visual attributes belong to the presentation layer, not this crate.
//!
//! ## WinTally
//!
//! Per-player count of concluded wins. The tally survives `reset` (it is
//! session scope, not round scope) and is mutated only on transitions into
//! or out of the `Won` status, never by move placement itself.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One of the two players.
///
/// `Black` carries id +1, `White` id -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players, in id order.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The nonzero numeric id: +1 for Black, -1 for White.
    ///
    /// Used as the board cell value and the turn pointer in external
    /// protocols.
    #[must_use]
    pub const fn id(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// 0-based index (Black = 0, White = 1), used for tally storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Per-player win counts, persisting across rounds within a session.
///
/// Indexable by `Player`:
///
/// ```
/// use gomoku_core::core::{Player, WinTally};
///
/// let mut tally = WinTally::new();
/// tally.record_win(Player::Black);
/// assert_eq!(tally[Player::Black], 1);
/// assert_eq!(tally[Player::White], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    wins: [u32; 2],
}

impl WinTally {
    /// Create a zeroed tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a player's win count.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Record a concluded win for a player.
    pub fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }

    /// Revoke a previously recorded win.
    ///
    /// Called when the move that concluded the current round is undone.
    /// Saturating so a caller bug cannot drive the count below zero.
    pub fn revoke_win(&mut self, player: Player) {
        self.wins[player.index()] = self.wins[player.index()].saturating_sub(1);
    }

    /// Iterate over (Player, wins) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.iter().map(move |&p| (p, self.wins(p)))
    }
}

impl Index<Player> for WinTally {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.wins[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ids_nonzero_and_opposite() {
        assert_eq!(Player::Black.id(), 1);
        assert_eq!(Player::White.id(), -1);
        assert_eq!(Player::Black.id(), -Player::White.id());
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::ALL {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Black), "Black");
        assert_eq!(format!("{}", Player::White), "White");
    }

    #[test]
    fn test_tally_record_and_revoke() {
        let mut tally = WinTally::new();

        tally.record_win(Player::White);
        tally.record_win(Player::White);
        tally.record_win(Player::Black);

        assert_eq!(tally[Player::Black], 1);
        assert_eq!(tally[Player::White], 2);

        tally.revoke_win(Player::White);
        assert_eq!(tally[Player::White], 1);
    }

    #[test]
    fn test_tally_revoke_saturates() {
        let mut tally = WinTally::new();
        tally.revoke_win(Player::Black);
        assert_eq!(tally[Player::Black], 0);
    }

    #[test]
    fn test_tally_iter() {
        let mut tally = WinTally::new();
        tally.record_win(Player::Black);

        let pairs: Vec<_> = tally.iter().collect();
        assert_eq!(pairs, vec![(Player::Black, 1), (Player::White, 0)]);
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Black).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::Black);
    }
}
