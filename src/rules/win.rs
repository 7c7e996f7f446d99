//! Victory scan: five-in-a-row detection around a just-placed stone.
//!
//! Only lines through the last placement can newly win, so the scan never
//! looks at the whole board: for each of the four undirected directions it
//! walks outward from the placed cell in both senses, collecting the
//! contiguous run of same-player stones.

use smallvec::SmallVec;

use crate::core::{Board, Coord, Player, WIN_LENGTH};

/// Ordered coordinates of a winning run.
///
/// At least [`WIN_LENGTH`] cells, contiguous along one direction, all one
/// player's, always containing the triggering cell. Inline capacity covers
/// runs up to 8; longer runs (up to the board side) spill to the heap.
pub type WinningLine = SmallVec<[Coord; 8]>;

/// The four undirected line directions, in scan order:
/// horizontal, vertical, diagonal, anti-diagonal.
pub const DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find a winning line through `placed` for `player`, if one exists.
///
/// Directions are scanned in the fixed [`DIRECTIONS`] order and the first
/// qualifying run is returned. Since every candidate run contains the
/// placed cell and belongs to the same player, scanning order cannot
/// change the winner, only which of several simultaneous lines is
/// highlighted. The whole contiguous run is returned: a 6-in-a-row yields
/// 6 coordinates, not a 5-cell window.
#[must_use]
pub fn find_winning_line(board: &Board, placed: Coord, player: Player) -> Option<WinningLine> {
    for &(dr, dc) in &DIRECTIONS {
        let mut line: WinningLine = SmallVec::new();
        line.push(placed);

        // Walk the negative sense, prepending so the line stays ordered.
        let mut cursor = placed.step(-dr, -dc);
        while let Some(coord) = cursor {
            if board.get(coord) != Some(player) {
                break;
            }
            line.insert(0, coord);
            cursor = coord.step(-dr, -dc);
        }

        // Walk the positive sense, appending.
        let mut cursor = placed.step(dr, dc);
        while let Some(coord) = cursor {
            if board.get(coord) != Some(player) {
                break;
            }
            line.push(coord);
            cursor = coord.step(dr, dc);
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }

    None
}
