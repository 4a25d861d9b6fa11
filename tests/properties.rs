//! Property tests over positions reached by random legal playouts.

use proptest::prelude::*;

use reversi::board::{Board, Cell, Player};
use reversi::eval::{evaluate, EvaluationTable, RingWeights};
use reversi::rules::{apply, flips_for, is_game_over, legal_moves, side_to_move};

/// Play `choices.len()` plies from the opening, each picking a legal move by
/// index. Stops early when the game ends.
fn playout(size: usize, choices: &[usize]) -> (Board, Player) {
    let mut board = Board::new(size).unwrap();
    let mut nominal = Player::Black;
    for &choice in choices {
        let Some(mover) = side_to_move(&board, nominal) else {
            break;
        };
        let moves = legal_moves(&board, mover);
        let mov = &moves[choice % moves.len()];
        board = apply(&board, mov, mover).unwrap();
        nominal = mover.opponent();
    }
    (board, nominal)
}

fn arbitrary_position() -> impl Strategy<Value = (Board, Player)> {
    (
        prop::sample::select(vec![4usize, 6, 8]),
        prop::collection::vec(any::<usize>(), 0..60),
    )
        .prop_map(|(size, choices)| playout(size, &choices))
}

fn ring_weights() -> impl Strategy<Value = RingWeights> {
    (
        -500i32..500,
        -500i32..500,
        -500i32..500,
        -500i32..500,
        -500i32..500,
        -500i32..500,
    )
        .prop_map(|(corner, c_square, x_square, edge, inner_ring, center)| RingWeights {
            corner,
            c_square,
            x_square,
            edge,
            inner_ring,
            center,
        })
}

proptest! {
    #[test]
    fn prop_evaluation_is_zero_sum((board, _) in arbitrary_position(), ring in ring_weights()) {
        let table = EvaluationTable::generate(board.size(), &ring).unwrap();
        prop_assert_eq!(
            evaluate(&board, Player::Black, &table).unwrap(),
            -evaluate(&board, Player::White, &table).unwrap()
        );
    }

    #[test]
    fn prop_moves_target_empty_cells_and_flip((board, player) in arbitrary_position()) {
        for mov in legal_moves(&board, player) {
            prop_assert_eq!(board.get(mov.pos), Cell::Empty);
            prop_assert!(mov.flip_count() > 0);
            prop_assert_eq!(mov.flips, flips_for(&board, mov.pos, player));
        }
    }

    #[test]
    fn prop_apply_moves_exactly_the_flipped_discs((board, player) in arbitrary_position()) {
        let opponent = player.opponent();
        for mov in legal_moves(&board, player) {
            let next = apply(&board, &mov, player).unwrap();
            let flipped = mov.flip_count();

            prop_assert_eq!(next.total(), board.total() + 1);
            prop_assert_eq!(next.count(player), board.count(player) + flipped + 1);
            prop_assert_eq!(next.count(opponent), board.count(opponent) - flipped);
            for pos in mov.flipped(board.size()) {
                prop_assert_eq!(board.get(pos), opponent.cell());
                prop_assert_eq!(next.get(pos), player.cell());
            }
        }
    }

    #[test]
    fn prop_game_over_means_nobody_moves((board, player) in arbitrary_position()) {
        if is_game_over(&board) {
            prop_assert!(legal_moves(&board, player).is_empty());
            prop_assert!(legal_moves(&board, player.opponent()).is_empty());
        }
    }
}
