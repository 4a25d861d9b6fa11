//! Disc flipping: which opponent discs a placement brackets
//!
//! Flip pattern: P-O-...-O-P along one of the eight compass lines, where the
//! first P is the new disc. Every O between the two P discs is flipped.

use crate::board::{Bitboard, Board, Cell, Player, Pos, DIRECTIONS};

/// Opponent discs bracketed in a single direction from `pos`.
///
/// Walks away from `pos` while the cells hold opponent discs. The walk counts
/// only if it stops on one of `player`'s discs after crossing at least one
/// opponent disc; hitting the edge or an empty cell yields nothing.
pub fn flips_in_direction(board: &Board, pos: Pos, player: Player, dx: i32, dy: i32) -> Bitboard {
    let size = board.size();
    let own = player.cell();
    let opp = player.opponent().cell();

    let mut line = Bitboard::new();
    let mut cursor = pos.offset(dx, dy, size);
    while let Some(p) = cursor {
        match board.get(p) {
            c if c == opp => {
                line.set(p.to_index(size));
                cursor = p.offset(dx, dy, size);
            }
            c if c == own => return line,
            _ => return Bitboard::new(),
        }
    }

    // Ran off the board without closing the line
    Bitboard::new()
}

/// All discs flipped by `player` placing at `pos`.
///
/// Returns an empty set when `pos` is off the board, occupied or brackets
/// nothing, which is exactly the case where the placement is illegal.
pub fn flips_for(board: &Board, pos: Pos, player: Player) -> Bitboard {
    if !is_open(board, pos) {
        return Bitboard::new();
    }

    let mut flips = Bitboard::new();
    for &(dx, dy) in &DIRECTIONS {
        flips |= flips_in_direction(board, pos, player, dx, dy);
    }
    flips
}

/// Like [`flips_for`], but stops at the first direction that flips anything.
#[inline]
pub fn flips_any(board: &Board, pos: Pos, player: Player) -> bool {
    is_open(board, pos)
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| !flips_in_direction(board, pos, player, dx, dy).is_empty())
}

/// On the board and empty
#[inline]
fn is_open(board: &Board, pos: Pos) -> bool {
    board.contains(i32::from(pos.x), i32::from(pos.y)) && board.get(pos) == Cell::Empty
}
