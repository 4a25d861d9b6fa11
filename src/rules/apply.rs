//! Move application

use tracing::trace;

use crate::board::{Board, Player, Pos};
use crate::error::{ReversiError, Result};

use super::flips::flips_for;
use super::legal::Move;

/// Play `mov` for `player` on a copy of `board`.
///
/// The move must be one the move generator produces for this exact board and
/// player: a stale move (computed on another position) or one with altered
/// flips is rejected with [`ReversiError::IllegalMoveApplied`].
pub fn apply(board: &Board, mov: &Move, player: Player) -> Result<Board> {
    let size = board.size();
    if mov.pos.x as usize >= size || mov.pos.y as usize >= size {
        return Err(ReversiError::OutOfBounds {
            x: mov.pos.x as usize,
            y: mov.pos.y as usize,
            size,
        });
    }

    let expected = flips_for(board, mov.pos, player);
    if expected.is_empty() || expected != mov.flips {
        trace!(pos = %mov.pos, ?player, "rejected stale or illegal move");
        return Err(illegal(mov.pos, player));
    }

    Ok(apply_unchecked(board, mov, player))
}

/// Generate the flips for `pos` and play them in one step.
///
/// Entry point for coordinates coming from outside the engine (human input,
/// the AI's chosen square).
pub fn play(board: &Board, x: usize, y: usize, player: Player) -> Result<Board> {
    let pos = board.pos(x, y)?;
    let flips = flips_for(board, pos, player);
    if flips.is_empty() {
        trace!(%pos, ?player, "rejected illegal placement");
        return Err(illegal(pos, player));
    }
    Ok(apply_unchecked(board, &Move { pos, flips }, player))
}

/// Apply a move that was just generated for this board and player.
///
/// The search owns generation and application at each recursion level, so it
/// skips the re-validation done by [`apply`].
#[inline]
pub(crate) fn apply_unchecked(board: &Board, mov: &Move, player: Player) -> Board {
    let mut next = *board;
    next.place(mov.pos, player);
    next.flip(mov.flips, player);
    next
}

fn illegal(pos: Pos, player: Player) -> ReversiError {
    ReversiError::IllegalMoveApplied {
        x: pos.x as usize,
        y: pos.y as usize,
        player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::rules::legal_moves;

    #[test]
    fn test_apply_opening_move() {
        let board = Board::new(8).unwrap();
        let mov = legal_moves(&board, Player::Black)[0];
        let next = apply(&board, &mov, Player::Black).unwrap();

        assert_eq!(next.get(Pos::new(3, 2)), Cell::Black);
        assert_eq!(next.get(Pos::new(3, 3)), Cell::Black);
        assert_eq!(next.count(Player::Black), 4);
        assert_eq!(next.count(Player::White), 1);
        // original untouched
        assert_eq!(board.count(Player::Black), 2);
    }

    #[test]
    fn test_apply_counts_match_flips() {
        let board = Board::from_rows(&[
            "B.B.B.",
            ".WWW..",
            "BW.WB.",
            ".WWW..",
            "B.B.B.",
            "......",
        ])
        .unwrap();

        for mov in legal_moves(&board, Player::Black) {
            let next = apply(&board, &mov, Player::Black).unwrap();
            assert_eq!(
                next.count(Player::Black),
                board.count(Player::Black) + 1 + mov.flip_count()
            );
            assert_eq!(
                next.count(Player::White),
                board.count(Player::White) - mov.flip_count()
            );
            assert_eq!(next.total(), board.total() + 1);
        }
    }

    #[test]
    fn test_apply_rejects_stale_move() {
        let board = Board::new(8).unwrap();
        let mov = legal_moves(&board, Player::Black)[0];
        let next = apply(&board, &mov, Player::Black).unwrap();

        // Same move again: the target is now occupied
        assert_eq!(
            apply(&next, &mov, Player::Black),
            Err(ReversiError::IllegalMoveApplied { x: 3, y: 2, player: Player::Black })
        );
    }

    #[test]
    fn test_apply_rejects_wrong_player() {
        let board = Board::new(8).unwrap();
        let mov = legal_moves(&board, Player::Black)[0];
        assert!(matches!(
            apply(&board, &mov, Player::White),
            Err(ReversiError::IllegalMoveApplied { .. })
        ));
    }

    #[test]
    fn test_apply_rejects_tampered_flips() {
        let board = Board::new(8).unwrap();
        let mut mov = legal_moves(&board, Player::Black)[0];
        mov.flips.set(Pos::new(4, 4).to_index(8));
        assert!(apply(&board, &mov, Player::Black).is_err());
    }

    #[test]
    fn test_play_by_coordinates() {
        let board = Board::new(8).unwrap();
        let next = play(&board, 5, 4, Player::Black).unwrap();
        assert_eq!(next.get(Pos::new(4, 4)), Cell::Black);
        assert_eq!(next.count(Player::Black), 4);

        assert!(matches!(
            play(&board, 0, 0, Player::Black),
            Err(ReversiError::IllegalMoveApplied { .. })
        ));
        assert_eq!(
            play(&board, 8, 0, Player::Black),
            Err(ReversiError::OutOfBounds { x: 8, y: 0, size: 8 })
        );
    }
}
