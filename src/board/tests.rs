use super::*;
use crate::error::ReversiError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(Player::Black.opponent().opponent(), Player::Black);
}

#[test]
fn test_cell_player_mapping() {
    assert_eq!(Player::Black.cell(), Cell::Black);
    assert_eq!(Cell::White.player(), Some(Player::White));
    assert_eq!(Cell::Empty.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 5);
    assert_eq!(pos.to_index(8), 5 * 8 + 3);
    assert_eq!(Pos::from_index(43, 8), pos);
    assert_eq!(Pos::from_index(pos.to_index(6), 6), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 6));
    assert!(Pos::is_valid(5, 5, 6));
    assert!(!Pos::is_valid(-1, 0, 6));
    assert!(!Pos::is_valid(0, -1, 6));
    assert!(!Pos::is_valid(6, 0, 6));
    assert!(Pos::is_valid(6, 0, 8));
}

#[test]
fn test_pos_ordering_is_row_major() {
    let a = Pos::new(5, 0);
    let b = Pos::new(0, 1);
    let c = Pos::new(1, 1);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_supported_sizes() {
    assert!(is_supported_size(4));
    assert!(is_supported_size(6));
    assert!(is_supported_size(8));
    assert!(!is_supported_size(5));
    assert!(!is_supported_size(2));
    assert!(!is_supported_size(10));
    assert_eq!(Board::new(7).unwrap_err(), ReversiError::InvalidBoardSize(7));
}

#[test]
fn test_initial_position_8x8() {
    let board = Board::new(8).unwrap();
    assert_eq!(board.occupant(3, 3).unwrap(), Cell::White);
    assert_eq!(board.occupant(4, 4).unwrap(), Cell::White);
    assert_eq!(board.occupant(3, 4).unwrap(), Cell::Black);
    assert_eq!(board.occupant(4, 3).unwrap(), Cell::Black);
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.total(), 4);
    assert_eq!(board.empties(), 60);
}

#[test]
fn test_initial_position_6x6() {
    let board = Board::new(6).unwrap();
    assert_eq!(board.occupant(2, 2).unwrap(), Cell::White);
    assert_eq!(board.occupant(3, 3).unwrap(), Cell::White);
    assert_eq!(board.occupant(3, 2).unwrap(), Cell::Black);
    assert_eq!(board.occupant(2, 3).unwrap(), Cell::Black);
    assert_eq!(board.empties(), 32);
}

#[test]
fn test_occupant_out_of_bounds() {
    let board = Board::new(6).unwrap();
    assert_eq!(
        board.occupant(6, 0),
        Err(ReversiError::OutOfBounds { x: 6, y: 0, size: 6 })
    );
    assert!(board.occupant(0, 17).is_err());
    assert!(board.occupant(5, 5).is_ok());
}

#[test]
fn test_copy_is_independent() {
    let original = Board::new(8).unwrap();
    let mut copy = original;
    copy.place(Pos::new(0, 0), Player::Black);

    assert_eq!(copy.get(Pos::new(0, 0)), Cell::Black);
    assert_eq!(original.get(Pos::new(0, 0)), Cell::Empty);
    assert_ne!(original, copy);
}

#[test]
fn test_set_overwrites_owner() {
    let mut board = Board::empty(4).unwrap();
    let pos = Pos::new(1, 2);
    board.place(pos, Player::Black);
    board.place(pos, Player::White);
    assert_eq!(board.get(pos), Cell::White);
    assert_eq!(board.count(Player::Black), 0);
    board.set(pos, Cell::Empty);
    assert_eq!(board.total(), 0);
}

#[test]
fn test_from_rows_round_trips_display() {
    let rows = ["....", ".WB.", ".BW.", "...."];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board, Board::new(4).unwrap());
    assert_eq!(board.to_string(), "....\n.WB.\n.BW.\n....\n");
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(matches!(
        Board::from_rows(&["....", "....", "...", "...."]),
        Err(ReversiError::InvalidBoardText(_))
    ));
    assert!(matches!(
        Board::from_rows(&["....", "..?.", "....", "...."]),
        Err(ReversiError::InvalidBoardText(_))
    ));
    assert_eq!(
        Board::from_rows(&["...", "...", "..."]),
        Err(ReversiError::InvalidBoardSize(3))
    );
}

#[test]
fn test_neighbors_corner_and_center() {
    let board = Board::new(8).unwrap();
    assert_eq!(board.neighbors(Pos::new(0, 0)).count(), 3);
    assert_eq!(board.neighbors(Pos::new(0, 4)).count(), 5);
    assert_eq!(board.neighbors(Pos::new(4, 4)).count(), 8);
}

#[test]
fn test_cells_row_major() {
    let board = Board::new(4).unwrap();
    let cells: Vec<_> = board.cells().collect();
    assert_eq!(cells.len(), 16);
    assert_eq!(cells[0].0, Pos::new(0, 0));
    assert_eq!(cells[1].0, Pos::new(1, 0));
    assert_eq!(cells[5], (Pos::new(1, 1), Cell::White));
    assert_eq!(cells[6], (Pos::new(2, 1), Cell::Black));
}

#[test]
fn test_bitboard_iteration() {
    let mut bb = Bitboard::new();
    bb.set(3);
    bb.set(40);
    bb.set(63);
    assert_eq!(bb.count(), 3);
    assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![3, 40, 63]);
    bb.clear(40);
    assert!(!bb.get(40));
    assert_eq!(Bitboard::full(8).count(), 64);
    assert_eq!(Bitboard::full(6).count(), 36);
}
