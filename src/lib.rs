//! # gomoku-core
//!
//! A Gomoku (five-in-a-row) game-state engine: 15x15 board, move
//! application and undo, turn sequencing, and victory/draw detection.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, layout, styling, or score formatting.
//!    A presentation collaborator drives the engine with move/undo/reset
//!    requests and renders the structured events it gets back.
//!
//! 2. **Rejections, not errors**: illegal requests (occupied cell,
//!    out-of-bounds, move after a conclusion, undo on empty history) are
//!    no-ops that return `None`. Nothing happened, nothing to render.
//!
//! 3. **Deterministic where it matters**: the starting-player coin flip is
//!    the only nondeterminism, and it sits behind an injectable seeded RNG.
//!
//! ## Modules
//!
//! - `core`: players, win tally, board, move history, RNG
//! - `rules`: round status and the victory scan
//! - `engine`: the `GameEngine` state machine and its event types
//!
//! ## Example
//!
//! ```
//! use gomoku_core::{GameEngine, GameRng, PlaceOutcome};
//!
//! let mut engine = GameEngine::with_rng(GameRng::new(42));
//!
//! match engine.place_move(7, 7) {
//!     Some(PlaceOutcome::Placed { mv, next_turn }) => {
//!         println!("{} placed at {}, {} to move", mv.player, mv.coord, next_turn);
//!     }
//!     Some(outcome) => println!("round over: {outcome:?}"),
//!     None => println!("rejected"),
//! }
//! ```

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, GameRng, Move, MoveHistory, Player, WinTally, BOARD_SIZE, CELL_COUNT,
    WIN_LENGTH,
};
pub use crate::engine::{GameEngine, PlaceOutcome, ResetEvent, UndoEvent};
pub use crate::rules::{find_winning_line, GameStatus, WinningLine};
