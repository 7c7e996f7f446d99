//! The game engine: a pure state machine over board, history, and turns.
//!
//! ## Model
//!
//! One `GameEngine` instance owns one game. Operations are synchronous and
//! run to completion; there is no interior mutability and no global state,
//! so independent games are just independent instances.
//!
//! Invalid requests — out-of-bounds coordinates, occupied cells, moves
//! after a conclusion, undo on an empty history — are not errors. They are
//! no-op rejections returning `None`: the state does not change and no
//! event is produced.
//!
//! ## Invariants
//!
//! - occupied cell count == history length, after every operation;
//! - sequence numbers contiguous from 1;
//! - the turn holder equals the starter after an even number of moves;
//! - the win tally changes only on transitions into/out of `Won`.

pub mod events;

pub use events::{PlaceOutcome, ResetEvent, UndoEvent};

use im::Vector;

use crate::core::{Board, Coord, GameRng, Move, MoveHistory, Player, WinTally};
use crate::rules::{find_winning_line, GameStatus};

/// Holds all mutable game state and applies move, undo, and reset
/// requests from the presentation collaborator.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    history: MoveHistory,
    turn: Player,
    starter: Player,
    status: GameStatus,
    tally: WinTally,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded RNG.
    ///
    /// The first round's starting player is coin-flipped, the same as
    /// `reset(false)`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create an engine with an injected RNG, for deterministic play.
    #[must_use]
    pub fn with_rng(mut rng: GameRng) -> Self {
        let starter = rng.pick_starter();
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            turn: starter,
            starter,
            status: GameStatus::InProgress,
            tally: WinTally::new(),
            rng,
        }
    }

    // === Operations ===

    /// Start a fresh round: clear the board and history, status back to
    /// in-progress. The win tally is preserved.
    ///
    /// With `preserve_turn` the previous round's starting player starts
    /// again; otherwise an unbiased coin flip picks the starter.
    pub fn reset(&mut self, preserve_turn: bool) -> ResetEvent {
        if !preserve_turn {
            self.starter = self.rng.pick_starter();
        }
        self.board = Board::new();
        self.history = MoveHistory::new();
        self.status = GameStatus::InProgress;
        self.turn = self.starter;

        ResetEvent {
            starter: self.starter,
        }
    }

    /// Place the current player's stone at (row, col).
    ///
    /// Returns `None` — rejecting the request with zero state change —
    /// when the round is over, the coordinates are out of bounds, or the
    /// cell is occupied. Otherwise the stone is placed, the move recorded,
    /// and the outcome describes what the collaborator should render:
    /// a turn advance, a win (with the full line and updated tally), or
    /// a draw on the final cell.
    pub fn place_move(&mut self, row: i16, col: i16) -> Option<PlaceOutcome> {
        if !self.status.is_in_progress() {
            return None;
        }
        let coord = Coord::from_signed(row, col)?;
        if !self.board.is_empty(coord) {
            return None;
        }

        let player = self.turn;
        self.board.set(coord, player);
        let mv = Move::new(player, coord, self.history.next_sequence());
        self.history.push(mv);

        if let Some(line) = find_winning_line(&self.board, coord, player) {
            self.tally.record_win(player);
            self.status = GameStatus::Won {
                winner: player,
                line: line.clone(),
            };
            // Turn deliberately does not advance past a conclusion.
            return Some(PlaceOutcome::Won {
                mv,
                line,
                wins: self.tally[player],
            });
        }

        if self.board.is_full() {
            self.status = GameStatus::Drawn;
            return Some(PlaceOutcome::Drawn { mv });
        }

        self.turn = player.opponent();
        Some(PlaceOutcome::Placed {
            mv,
            next_turn: self.turn,
        })
    }

    /// Take back the most recent move.
    ///
    /// Returns `None` when the history is empty. Otherwise the move's cell
    /// is vacated, any conclusion is reverted to in-progress, and the turn
    /// passes to the player who made the undone move — they replay that
    /// turn rather than the pre-move holder being restored.
    ///
    /// No placement is accepted after a conclusion, so when the status is
    /// `Won` the popped move is necessarily the winning one; its player's
    /// tally entry is decremented to keep the tally equal to the number of
    /// wins still reflected by state.
    pub fn undo_move(&mut self) -> Option<UndoEvent> {
        let mv = self.history.pop()?;
        self.board.clear(mv.coord);

        let forfeited_win = match &self.status {
            GameStatus::Won { winner, .. } => {
                self.tally.revoke_win(*winner);
                true
            }
            _ => false,
        };

        self.status = GameStatus::InProgress;
        self.turn = mv.player;

        Some(UndoEvent {
            mv,
            turn: self.turn,
            forfeited_win,
        })
    }

    // === Read-only queries ===

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current round status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// The player whose move is currently accepted.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The current round's starting player.
    #[must_use]
    pub fn starter(&self) -> Player {
        self.starter
    }

    /// Number of moves placed this round.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// O(1) snapshot of the full move history, in placement order.
    #[must_use]
    pub fn history(&self) -> Vector<Move> {
        self.history.snapshot()
    }

    /// The last `k` moves, for a bounded recent-moves feed.
    #[must_use]
    pub fn recent_moves(&self, k: usize) -> Vec<Move> {
        self.history.recent(k)
    }

    /// Session win counts for both players.
    #[must_use]
    pub fn tally(&self) -> &WinTally {
        &self.tally
    }

    /// A player's session win count.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        self.tally[player]
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::with_rng(GameRng::new(42))
    }

    /// Drive the engine to a horizontal win for the starting player:
    /// starter plays row 7, the opponent parks on row 0.
    fn play_to_win(engine: &mut GameEngine) -> PlaceOutcome {
        for i in 0..4 {
            assert!(engine.place_move(7, i).is_some());
            assert!(engine.place_move(0, i).is_some());
        }
        engine.place_move(7, 4).expect("winning move accepted")
    }

    #[test]
    fn test_place_advances_turn() {
        let mut engine = engine();
        let first = engine.turn();

        let outcome = engine.place_move(7, 7).unwrap();
        match outcome {
            PlaceOutcome::Placed { mv, next_turn } => {
                assert_eq!(mv.player, first);
                assert_eq!(mv.sequence, 1);
                assert_eq!(next_turn, first.opponent());
            }
            other => panic!("expected Placed, got {other:?}"),
        }
        assert_eq!(engine.turn(), first.opponent());
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = engine();
        engine.place_move(7, 7).unwrap();

        let before_turn = engine.turn();
        assert!(engine.place_move(7, 7).is_none());
        // Rejection is idempotent: a second identical request is also a no-op.
        assert!(engine.place_move(7, 7).is_none());
        assert_eq!(engine.turn(), before_turn);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = engine();
        for (row, col) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100)] {
            assert!(engine.place_move(row, col).is_none());
        }
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.board().occupied_count(), 0);
    }

    #[test]
    fn test_win_stops_play_and_freezes_turn() {
        let mut engine = engine();
        let starter = engine.turn();

        let outcome = play_to_win(&mut engine);
        match &outcome {
            PlaceOutcome::Won { mv, line, wins } => {
                assert_eq!(mv.player, starter);
                assert_eq!(line.len(), 5);
                assert_eq!(*wins, 1);
            }
            other => panic!("expected Won, got {other:?}"),
        }

        assert_eq!(engine.status().winner(), Some(starter));
        // Turn does not advance past the conclusion.
        assert_eq!(engine.turn(), starter);
        // Nothing further is accepted.
        assert!(engine.place_move(10, 10).is_none());
        assert_eq!(engine.move_count(), 9);
    }

    #[test]
    fn test_undo_empty_history_rejected() {
        let mut engine = engine();
        assert!(engine.undo_move().is_none());
    }

    #[test]
    fn test_undo_round_trip() {
        let mut engine = engine();
        engine.place_move(3, 3).unwrap();

        let board_before = engine.board().clone();
        let turn_before = engine.turn();
        let count_before = engine.move_count();

        engine.place_move(5, 5).unwrap();
        let event = engine.undo_move().unwrap();

        assert_eq!(event.mv.coord, Coord::new(5, 5));
        assert_eq!(event.turn, turn_before);
        assert!(!event.forfeited_win);

        assert_eq!(engine.board(), &board_before);
        assert_eq!(engine.turn(), turn_before);
        assert_eq!(engine.move_count(), count_before);
        assert!(engine.status().is_in_progress());
    }

    #[test]
    fn test_undo_winning_move_revokes_win() {
        let mut engine = engine();
        let starter = engine.turn();
        play_to_win(&mut engine);
        assert_eq!(engine.wins(starter), 1);

        let event = engine.undo_move().unwrap();
        assert!(event.forfeited_win);
        assert_eq!(event.turn, starter);

        assert_eq!(engine.wins(starter), 0);
        assert!(engine.status().is_in_progress());
        // The winner replays their move.
        assert_eq!(engine.turn(), starter);

        // The vacated cell is playable again and re-wins.
        let outcome = engine.place_move(7, 4).unwrap();
        assert!(matches!(outcome, PlaceOutcome::Won { .. }));
        assert_eq!(engine.wins(starter), 1);
    }

    #[test]
    fn test_undo_mid_game_gives_turn_to_mover() {
        let mut engine = engine();
        let starter = engine.turn();

        engine.place_move(1, 1).unwrap(); // starter
        engine.place_move(2, 2).unwrap(); // opponent

        let event = engine.undo_move().unwrap();
        // The opponent made the undone move, so the opponent moves again.
        assert_eq!(event.turn, starter.opponent());
        assert_eq!(engine.turn(), starter.opponent());
    }

    #[test]
    fn test_reset_preserves_tally_and_clears_round() {
        let mut engine = engine();
        let starter = engine.turn();
        play_to_win(&mut engine);

        let event = engine.reset(true);
        assert_eq!(event.starter, starter);
        assert_eq!(engine.turn(), starter);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.board().occupied_count(), 0);
        assert!(engine.status().is_in_progress());
        // Tally is session scope.
        assert_eq!(engine.wins(starter), 1);
    }

    #[test]
    fn test_reset_coin_flip_uses_rng() {
        let mut a = GameEngine::with_rng(GameRng::new(9));
        let mut b = GameEngine::with_rng(GameRng::new(9));

        for _ in 0..50 {
            assert_eq!(a.reset(false).starter, b.reset(false).starter);
        }
    }

    #[test]
    fn test_history_and_recent_moves() {
        let mut engine = engine();
        engine.place_move(0, 0).unwrap();
        engine.place_move(1, 1).unwrap();
        engine.place_move(2, 2).unwrap();

        let history = engine.history();
        assert_eq!(history.len(), 3);
        let seqs: Vec<_> = history.iter().map(|m| m.sequence).collect();
        assert_eq!(seqs, vec![1, 2, 3]);

        let recent = engine.recent_moves(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].coord, Coord::new(1, 1));
        assert_eq!(recent[1].coord, Coord::new(2, 2));
    }

    #[test]
    fn test_independent_instances() {
        let mut a = GameEngine::with_rng(GameRng::new(1));
        let mut b = GameEngine::with_rng(GameRng::new(2));

        a.place_move(7, 7).unwrap();
        assert_eq!(a.move_count(), 1);
        assert_eq!(b.move_count(), 0);

        b.place_move(0, 0).unwrap();
        assert_eq!(a.board().occupied_count(), 1);
        assert_eq!(b.board().occupied_count(), 1);
        assert!(a.board().is_empty(Coord::new(0, 0)));
    }
}
