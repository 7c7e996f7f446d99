//! Core engine types: players, board, move history, RNG.
//!
//! These are the plain-data building blocks. Game semantics (turn
//! sequencing, victory, undo) live in `rules` and `engine`.

pub mod board;
pub mod history;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Coord, BOARD_SIZE, CELL_COUNT, WIN_LENGTH};
pub use history::{Move, MoveHistory};
pub use player::{Player, WinTally};
pub use rng::GameRng;
