//! Static evaluation of reversi positions
//!
//! The score is positional only: the table weights of one side's discs minus
//! the weights of the other side's discs.

use crate::board::{Board, Player};
use crate::error::{ReversiError, Result};

use super::table::EvaluationTable;

/// Evaluate the board from the perspective of the given player.
///
/// Positive values favour `player`. The evaluation is zero-sum:
/// `evaluate(board, Black, t) == -evaluate(board, White, t)`, which the
/// minimax search relies on.
///
/// # Errors
///
/// [`ReversiError::TableSizeMismatch`] when `table` was built for another
/// board size.
pub fn evaluate(board: &Board, player: Player, table: &EvaluationTable) -> Result<i32> {
    if board.size() != table.size() {
        return Err(ReversiError::TableSizeMismatch {
            table: table.size(),
            board: board.size(),
        });
    }
    Ok(score(board, player, table))
}

/// [`evaluate`] for callers that already checked the table size.
#[inline]
pub(crate) fn score(board: &Board, player: Player, table: &EvaluationTable) -> i32 {
    debug_assert_eq!(board.size(), table.size());
    side_score(board, player, table) - side_score(board, player.opponent(), table)
}

/// Sum of table weights over `player`'s discs
#[inline]
fn side_score(board: &Board, player: Player, table: &EvaluationTable) -> i32 {
    board
        .discs(player)
        .iter_ones()
        .map(|idx| table.weight_at(idx))
        .sum()
}
