//! Turn order and end-of-game detection
//!
//! Standard reversi rules: a side without a legal move passes; the game ends
//! when neither side can move (which includes a full board).

use crate::board::{Board, Player};

use super::legal::has_any_legal_move;

/// Check if the game is over: neither side has a legal move.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    board.is_full()
        || (!has_any_legal_move(board, Player::Black) && !has_any_legal_move(board, Player::White))
}

/// Who actually moves when it is nominally `player`'s turn.
///
/// Returns `player` if it can move, the opponent if `player` must pass, and
/// `None` once the game is over.
#[must_use]
pub fn side_to_move(board: &Board, player: Player) -> Option<Player> {
    if has_any_legal_move(board, player) {
        Some(player)
    } else if has_any_legal_move(board, player.opponent()) {
        Some(player.opponent())
    } else {
        None
    }
}

/// Disc count difference from `player`'s point of view.
#[inline]
#[must_use]
pub fn disc_difference(board: &Board, player: Player) -> i32 {
    board.count(player) as i32 - board.count(player.opponent()) as i32
}

/// Winner of a finished game, `None` for a draw or an unfinished game.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    if !is_game_over(board) {
        return None;
    }
    match disc_difference(board, Player::Black) {
        d if d > 0 => Some(Player::Black),
        d if d < 0 => Some(Player::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_not_over() {
        let board = Board::new(8).unwrap();
        assert!(!is_game_over(&board));
        assert_eq!(side_to_move(&board, Player::Black), Some(Player::Black));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_winner() {
        let board = Board::from_rows(&["BBBB", "BBWW", "WWWW", "BBBB"]).unwrap();
        assert!(is_game_over(&board));
        assert_eq!(disc_difference(&board, Player::Black), 4);
        assert_eq!(disc_difference(&board, Player::White), -4);
        assert_eq!(winner(&board), Some(Player::Black));
    }

    #[test]
    fn test_draw() {
        let board = Board::from_rows(&["BBBB", "BBBB", "WWWW", "WWWW"]).unwrap();
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_wipeout_ends_game() {
        let board = Board::from_rows(&["....", ".WW.", ".WW.", "...."]).unwrap();
        assert!(is_game_over(&board));
        assert_eq!(side_to_move(&board, Player::Black), None);
        assert_eq!(winner(&board), Some(Player::White));
    }

    #[test]
    fn test_pass_hands_turn_to_opponent() {
        // Black has nothing to bracket; White can take (3, 3) across the diagonal.
        let board = Board::from_rows(&["WWWW", "WBBW", "WBBW", "WWW."]).unwrap();
        assert!(!has_any_legal_move(&board, Player::Black));
        assert!(has_any_legal_move(&board, Player::White));
        assert!(!is_game_over(&board));
        assert_eq!(side_to_move(&board, Player::Black), Some(Player::White));
        assert_eq!(winner(&board), None);
    }
}
