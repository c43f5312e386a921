//! Game rules outside the search: move legality, game end, winner
//!
//! The search core trusts its inputs; these checks exist for callers that
//! drive an actual game, like the CLI demo. A move is legal when it appears
//! in the generated move set: an empty cell adjacent to one of the player's
//! cells, claimed with the highest achievable value.

use thiserror::Error;

use crate::board::{Board, Player};
use crate::search::{generate_moves, Move};

/// Why a played move was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("cell ({row}, {col}) is not a legal target for player {player}")]
    IllegalTarget {
        row: usize,
        col: usize,
        player: Player,
    },
    #[error("wrong value at ({row}, {col}): expected {expected}, got {actual}")]
    WrongValue {
        row: usize,
        col: usize,
        expected: u16,
        actual: u16,
    },
}

/// Play a move for a player, validating it against the legal move set.
pub fn play_move(board: &mut Board, player: Player, mv: Move) -> Result<(), RuleError> {
    let legal = generate_moves(board, player)
        .into_iter()
        .find(|m| m.row == mv.row && m.col == mv.col)
        .ok_or(RuleError::IllegalTarget {
            row: mv.row,
            col: mv.col,
            player,
        })?;
    if legal.value != mv.value {
        return Err(RuleError::WrongValue {
            row: mv.row,
            col: mv.col,
            expected: legal.value,
            actual: mv.value,
        });
    }
    board.claim(mv.row, mv.col, player, mv.value);
    Ok(())
}

/// The game ends when neither player has a legal move.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    generate_moves(board, Player::A).is_empty() && generate_moves(board, Player::B).is_empty()
}

/// Winner by higher maximum placed value; `None` is a tie.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    use std::cmp::Ordering;
    match board.max_value(Player::A).cmp(&board.max_value(Player::B)) {
        Ordering::Greater => Some(Player::A),
        Ordering::Less => Some(Player::B),
        Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_legal_move() {
        let mut board = Board::standard(6);
        play_move(&mut board, Player::A, Move::new(0, 1, 2)).unwrap();
        assert_eq!(board.max_value(Player::A), 2);
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut board = Board::standard(6);
        let err = play_move(&mut board, Player::A, Move::new(0, 0, 2)).unwrap_err();
        assert_eq!(
            err,
            RuleError::IllegalTarget {
                row: 0,
                col: 0,
                player: Player::A
            }
        );
    }

    #[test]
    fn test_play_rejects_unreachable_cell() {
        let mut board = Board::standard(6);
        // (3,3) is not adjacent to any of A's cells
        assert!(matches!(
            play_move(&mut board, Player::A, Move::new(3, 3, 2)),
            Err(RuleError::IllegalTarget { .. })
        ));
    }

    #[test]
    fn test_play_rejects_wrong_value() {
        let mut board = Board::standard(6);
        let err = play_move(&mut board, Player::A, Move::new(0, 1, 7)).unwrap_err();
        assert_eq!(
            err,
            RuleError::WrongValue {
                row: 0,
                col: 1,
                expected: 2,
                actual: 7
            }
        );
    }

    #[test]
    fn test_play_accepts_every_generated_move() {
        let mut board = Board::standard(6);
        board.claim(0, 1, Player::A, 2);
        for mv in generate_moves(&board, Player::A) {
            let mut scratch = board.clone();
            play_move(&mut scratch, Player::A, mv).unwrap();
        }
    }

    #[test]
    fn test_game_over_detection() {
        assert!(is_game_over(&Board::new(3)));
        assert!(!is_game_over(&Board::standard(3)));

        // Fill a 2x2 board completely: nobody can move
        let mut board = Board::standard(2);
        board.claim(0, 1, Player::A, 2);
        board.claim(1, 0, Player::B, 2);
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_winner_by_max_value() {
        let mut board = Board::standard(4);
        assert_eq!(winner(&board), None);

        board.claim(0, 1, Player::A, 2);
        assert_eq!(winner(&board), Some(Player::A));

        board.claim(3, 2, Player::B, 2);
        board.claim(2, 2, Player::B, 3);
        assert_eq!(winner(&board), Some(Player::B));
    }
}
