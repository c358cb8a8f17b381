use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_player_direction() {
    assert_eq!(Player::Black.forward(), -1);
    assert_eq!(Player::White.forward(), 1);
    assert_eq!(Player::Black.last_row(), 0);
    assert_eq!(Player::White.last_row(), 5);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 6 + 4);

    let pos2 = Pos::from_index(22);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 6));
}

#[test]
fn test_pos_step_edges() {
    // Black steps up, White steps down
    assert_eq!(Pos::new(4, 2).step(Player::Black, Diagonal::Left, 1), Some(Pos::new(3, 1)));
    assert_eq!(Pos::new(1, 1).step(Player::White, Diagonal::Right, 2), Some(Pos::new(3, 3)));
    assert_eq!(Pos::new(4, 0).step(Player::Black, Diagonal::Left, 1), None);
    assert_eq!(Pos::new(1, 5).step(Player::White, Diagonal::Right, 1), None);
    assert_eq!(Pos::new(0, 2).step(Player::Black, Diagonal::Right, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 6);
    assert_eq!(TOTAL_CELLS, 36);
}

#[test]
fn test_default_layout() {
    let board = Board::new();
    assert_eq!(board.piece_count(Player::Black), 6);
    assert_eq!(board.piece_count(Player::White), 6);

    assert_eq!(board.occupant(Pos::new(0, 0)), Some(Player::White));
    assert_eq!(board.occupant(Pos::new(1, 5)), Some(Player::White));
    assert_eq!(board.occupant(Pos::new(4, 0)), Some(Player::Black));
    assert_eq!(board.occupant(Pos::new(5, 5)), Some(Player::Black));
    assert!(board.is_empty(Pos::new(0, 1)));
    for col in 0..6 {
        assert!(board.is_empty(Pos::new(2, col)));
        assert!(board.is_empty(Pos::new(3, col)));
    }

    // Cached positions are row-major
    assert_eq!(
        board.pieces(Player::White),
        &[
            Pos::new(0, 0),
            Pos::new(0, 2),
            Pos::new(0, 4),
            Pos::new(1, 1),
            Pos::new(1, 3),
            Pos::new(1, 5),
        ]
    );
}

#[test]
fn test_simple_move_updates_cache_incrementally() {
    let mut board = Board::new();
    let mv = Move::simple(Pos::new(4, 0), Pos::new(3, 1));
    board.apply_move(&mv, Player::Black);

    assert!(board.is_empty(Pos::new(4, 0)));
    assert_eq!(board.occupant(Pos::new(3, 1)), Some(Player::Black));
    assert_eq!(board.piece_count(Player::Black), 6);
    // Start removed, end appended at the back
    assert_eq!(board.pieces(Player::Black).last(), Some(&Pos::new(3, 1)));
    assert!(!board.pieces(Player::Black).contains(&Pos::new(4, 0)));
}

#[test]
fn test_jump_removes_captured_and_rebuilds_cache() {
    let mut board = Board::empty();
    board.place_piece(Pos::new(2, 2), Player::White);
    board.place_piece(Pos::new(3, 3), Player::Black);
    board.place_piece(Pos::new(0, 0), Player::White);

    let mv = Move::jump(Pos::new(2, 2), Pos::new(4, 4), vec![Pos::new(3, 3)]);
    board.apply_move(&mv, Player::White);

    assert_eq!(board.piece_count(Player::Black), 0);
    assert_eq!(board.pieces(Player::White), &[Pos::new(0, 0), Pos::new(4, 4)]);
    assert!(board.is_empty(Pos::new(3, 3)));
    assert!(board.is_empty(Pos::new(2, 2)));
}

#[test]
fn test_place_and_remove_keep_cache_consistent() {
    let mut board = Board::empty();
    board.place_piece(Pos::new(3, 2), Player::Black);
    board.place_piece(Pos::new(1, 2), Player::Black);
    assert_eq!(board.pieces(Player::Black), &[Pos::new(1, 2), Pos::new(3, 2)]);

    board.remove_piece(Pos::new(1, 2));
    assert_eq!(board.pieces(Player::Black), &[Pos::new(3, 2)]);
    assert_eq!(board.piece_count(Player::White), 0);
}

#[test]
fn test_board_display() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "  0 1 2 3 4 5 ");
    assert_eq!(lines[1], "0 W - W - W - ");
    assert_eq!(lines[3], "2 - - - - - - ");
    assert_eq!(lines[6], "5 - B - B - B ");
}

#[test]
fn test_move_accessors() {
    let mv = Move::jump(Pos::new(4, 4), Pos::new(0, 4), vec![Pos::new(3, 3), Pos::new(1, 3)]);
    assert!(mv.is_jump());
    assert_eq!(mv.captured().len(), 2);
    assert_eq!(mv.to_string(), "(4, 4) (0, 4)");

    let simple = Move::simple(Pos::new(4, 4), Pos::new(3, 5));
    assert!(!simple.is_jump());
    assert!(simple.captured().is_empty());
}
