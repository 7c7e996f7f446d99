//! Board representation: coordinates, cells, and the fixed 15x15 grid.
//!
//! ## Coord
//!
//! 0-based (row, col) position, both in `[0, BOARD_SIZE)`. Construction
//! from signed values is checked, so callers never index out of bounds.
//!
//! ## Board
//!
//! A fixed-size square grid where each cell is `None` (empty) or
//! `Some(Player)`. The board is plain data: it does not know about turns,
//! history, or victory. Those live in the engine and rules modules.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Side length of the board.
pub const BOARD_SIZE: usize = 15;

/// Stones in an unbroken line required to win.
pub const WIN_LENGTH: usize = 5;

/// Total number of cells; a round with this many moves and no winner is a draw.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One cell: empty or occupied by a player.
pub type Cell = Option<Player>;

/// A 0-based (row, col) position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. Debug-asserts bounds; use [`Coord::from_signed`]
    /// for untrusted input.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    /// Checked construction from signed values.
    ///
    /// Returns `None` when either component is negative or >= `BOARD_SIZE`.
    #[must_use]
    pub fn from_signed(row: i16, col: i16) -> Option<Self> {
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step by a direction vector, returning `None` past the board edge.
    #[must_use]
    pub fn step(self, dr: i16, dc: i16) -> Option<Self> {
        Self::from_signed(self.row as i16 + dr, self.col as i16 + dc)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 15x15 grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    occupied: u16,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            occupied: 0,
        }
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Check whether a cell is empty.
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Occupy a cell. Overwriting is an engine bug, not a game state,
    /// so it is rejected in debug builds.
    pub fn set(&mut self, coord: Coord, player: Player) {
        debug_assert!(self.is_empty(coord), "cell {coord} already occupied");
        self.cells[coord.row as usize][coord.col as usize] = Some(player);
        self.occupied += 1;
    }

    /// Clear a cell back to empty (undo support).
    pub fn clear(&mut self, coord: Coord) {
        if self.cells[coord.row as usize][coord.col as usize].take().is_some() {
            self.occupied -= 1;
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied as usize
    }

    /// True when every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).map(move |col| {
                let coord = Coord::new(row as u8, col as u8);
                (coord, self.get(coord))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
