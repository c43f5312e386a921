use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::A.opponent(), Player::B);
    assert_eq!(Player::B.opponent(), Player::A);
}

#[test]
fn test_player_ids() {
    assert_eq!(Player::A.id(), 1);
    assert_eq!(Player::B.id(), 2);
    assert_eq!(Player::from_id(1), Some(Player::A));
    assert_eq!(Player::from_id(2), Some(Player::B));
    assert_eq!(Player::from_id(0), None);
    assert_eq!(Player::from_id(3), None);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(6);
    assert_eq!(board.size(), 6);
    for r in 0..6 {
        for c in 0..6 {
            assert!(board.is_empty(r, c));
        }
    }
    assert_eq!(board.max_value(Player::A), 0);
    assert_eq!(board.max_value(Player::B), 0);
}

#[test]
fn test_standard_start_position() {
    let board = Board::standard(6);
    assert_eq!(
        board.get(0, 0),
        Some(Claim {
            player: Player::A,
            value: 1
        })
    );
    assert_eq!(
        board.get(5, 5),
        Some(Claim {
            player: Player::B,
            value: 1
        })
    );
    assert_eq!(board.max_value(Player::A), 1);
    assert_eq!(board.max_value(Player::B), 1);
    assert_eq!(board.cell_count(Player::A), 1);
    assert_eq!(board.cell_count(Player::B), 1);
}

#[test]
#[should_panic]
fn test_standard_rejects_single_cell_board() {
    // Both seed corners would target (0,0)
    let _ = Board::standard(1);
}

#[test]
fn test_claim_raises_max() {
    let mut board = Board::new(4);
    board.claim(0, 0, Player::A, 1);
    board.claim(1, 1, Player::A, 2);
    assert_eq!(board.max_value(Player::A), 2);

    // Claiming a lower value does not lower the maximum
    board.claim(0, 1, Player::A, 2);
    board.claim(2, 2, Player::B, 7);
    assert_eq!(board.max_value(Player::A), 2);
    assert_eq!(board.max_value(Player::B), 7);
}

#[test]
fn test_retract_recomputes_max() {
    let mut board = Board::new(4);
    board.claim(0, 0, Player::A, 1);
    board.claim(1, 1, Player::A, 2);
    board.claim(2, 2, Player::A, 3);

    // Retracting the maximum cell must fall back to the next-highest value
    board.retract(2, 2, Player::A);
    assert_eq!(board.max_value(Player::A), 2);
    assert!(board.is_empty(2, 2));

    board.retract(1, 1, Player::A);
    assert_eq!(board.max_value(Player::A), 1);
}

#[test]
fn test_retract_only_touches_one_player() {
    let mut board = Board::new(4);
    board.claim(0, 0, Player::A, 5);
    board.claim(3, 3, Player::B, 9);
    board.retract(0, 0, Player::A);
    assert_eq!(board.max_value(Player::A), 0);
    assert_eq!(board.max_value(Player::B), 9);
}

#[test]
fn test_in_bounds() {
    let board = Board::new(6);
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(5, 5));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(!board.in_bounds(6, 0));
    assert!(!board.in_bounds(0, 6));
}

#[test]
fn test_hash_deterministic() {
    let board = Board::standard(6);
    assert_eq!(board.hash(), board.hash());
}

#[test]
fn test_equal_grids_hash_equal() {
    let mut a = Board::new(5);
    let mut b = Board::new(5);
    a.claim(0, 0, Player::A, 1);
    a.claim(2, 3, Player::B, 4);
    b.claim(2, 3, Player::B, 4);
    b.claim(0, 0, Player::A, 1);
    // Claim order does not matter, only grid contents
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_different_grids_hash_differently() {
    let mut a = Board::new(5);
    let mut b = Board::new(5);
    a.claim(0, 0, Player::A, 1);
    b.claim(0, 0, Player::B, 1);
    assert_ne!(a.hash(), b.hash());
    assert_ne!(Board::new(5).hash(), a.hash());
}

#[test]
fn test_hash_restored_after_claim_retract() {
    let mut board = Board::standard(6);
    let before = board.hash();
    board.claim(0, 1, Player::A, 2);
    assert_ne!(board.hash(), before);
    board.retract(0, 1, Player::A);
    assert_eq!(board.hash(), before);
}

#[test]
fn test_display_contains_claims() {
    let board = Board::standard(3);
    let rendered = board.to_string();
    assert!(rendered.contains("A 1"));
    assert!(rendered.contains("B 1"));
    assert!(rendered.contains('.'));
}
