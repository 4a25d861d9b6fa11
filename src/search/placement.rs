//! Greedy single-ply placement
//!
//! Looks only at the weight of the cell being played, ignoring flips and
//! replies. Cheap enough for an "easy" opponent and useful as a baseline.

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::{ReversiError, Result};
use crate::eval::EvaluationTable;
use crate::rules::legal_moves;

/// Pick the legal cell with the highest table weight.
///
/// Ties go to the first cell in row-major order.
pub fn best_placement(board: &Board, player: Player, table: &EvaluationTable) -> Result<Pos> {
    if board.size() != table.size() {
        return Err(ReversiError::TableSizeMismatch {
            table: table.size(),
            board: board.size(),
        });
    }

    let mut best: Option<(Pos, i32)> = None;
    for mov in legal_moves(board, player) {
        let weight = table.weight(mov.pos);
        if best.map_or(true, |(_, w)| weight > w) {
            best = Some((mov.pos, weight));
        }
    }

    let (pos, weight) = best.ok_or(ReversiError::NoLegalMove(player))?;
    debug!(%pos, weight, ?player, "greedy placement");
    Ok(pos)
}
