//! Legal move generation
//!
//! A placement is legal when the target cell is empty and at least one of the
//! eight compass directions brackets opponent discs (see [`super::flips`]).

use crate::board::{Bitboard, Board, Player, Pos};

use super::flips::{flips_any, flips_for};

/// A legal placement together with the discs it flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    /// Opponent discs converted by this placement (never empty)
    pub flips: Bitboard,
}

impl Move {
    /// Number of discs this move flips
    #[inline]
    pub fn flip_count(&self) -> u32 {
        self.flips.count()
    }

    /// Flipped positions in row-major order, for a board of `size`
    pub fn flipped(&self, size: usize) -> impl Iterator<Item = Pos> {
        self.flips.iter_ones().map(move |idx| Pos::from_index(idx, size))
    }
}

/// Check whether `player` may place a disc at `pos`.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, player: Player) -> bool {
    flips_any(board, pos, player)
}

/// Every legal move for `player`, in row-major order of the target cell.
///
/// The order is part of the contract: the search breaks ties between equally
/// scored moves in favour of the first one generated.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let size = board.size();
    board
        .empty_cells()
        .iter_ones()
        .filter_map(|idx| {
            let pos = Pos::from_index(idx, size);
            let flips = flips_for(board, pos, player);
            (!flips.is_empty()).then_some(Move { pos, flips })
        })
        .collect()
}

/// Whether `player` has at least one legal move.
///
/// Stops at the first legal cell, so it is cheaper than generating the full
/// move list; the answer always equals `!legal_moves(board, player).is_empty()`.
#[must_use]
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    let size = board.size();
    board
        .empty_cells()
        .iter_ones()
        .any(|idx| flips_any(board, Pos::from_index(idx, size), player))
}

/// Legal target cells only, for input validators that do not need the flips
#[must_use]
pub fn legal_positions(board: &Board, player: Player) -> Vec<Pos> {
    legal_moves(board, player).into_iter().map(|m| m.pos).collect()
}
