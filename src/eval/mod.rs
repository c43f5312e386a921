//! Static evaluation for Sequencium positions
//!
//! The score combines three differences between the evaluated player and
//! the opponent, weighted so each term strictly dominates the next:
//!
//! 1. maximum placed value (x100)
//! 2. occupied-cell count (x10)
//! 3. mobility, the count of distinct reachable empty cells (x1)
//!
//! On a board of at most 10x10 no lower term can reach the next tier's
//! magnitude, so the weights encode a lexicographic preference order.

use crate::board::{Board, Player, MAX_BOARD_SIZE, NEIGHBOR_OFFSETS};

/// Weight of the maximum-value difference
pub const MAX_VALUE_WEIGHT: i32 = 100;
/// Weight of the occupied-cell difference
pub const CELL_COUNT_WEIGHT: i32 = 10;
/// Weight of the mobility difference
pub const MOBILITY_WEIGHT: i32 = 1;

/// Evaluate the board from the perspective of the given player.
///
/// Positive scores favor `player`, negative scores favor the opponent.
/// Pure function of the position; terminal positions get the same score
/// as non-terminal ones (there is no win bonus, the max-value term
/// already decides finished games).
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let opponent = player.opponent();

    let max_diff = i32::from(board.max_value(player)) - i32::from(board.max_value(opponent));
    let cell_diff = board.cell_count(player) as i32 - board.cell_count(opponent) as i32;
    let mobility_diff = count_mobility(board, player) - count_mobility(board, opponent);

    max_diff * MAX_VALUE_WEIGHT + cell_diff * CELL_COUNT_WEIGHT + mobility_diff * MOBILITY_WEIGHT
}

/// Count the distinct empty cells reachable by the player's next move.
///
/// Duplicate-suppressed neighbor scan; cheaper than full move generation
/// because no move values are materialized.
#[must_use]
pub fn count_mobility(board: &Board, player: Player) -> i32 {
    let mut visited = [[false; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
    let mut count = 0;

    for r in 0..board.size() {
        for c in 0..board.size() {
            if !matches!(board.get(r, c), Some(claim) if claim.player == player) {
                continue;
            }
            for (dr, dc) in NEIGHBOR_OFFSETS {
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                if board.in_bounds(nr, nc) {
                    let (nr, nc) = (nr as usize, nc as usize);
                    if board.is_empty(nr, nc) && !visited[nr][nc] {
                        visited[nr][nc] = true;
                        count += 1;
                    }
                }
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(3);
        assert_eq!(evaluate(&board, Player::A), 0);
        assert_eq!(evaluate(&board, Player::B), 0);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let mut board = Board::standard(6);
        board.claim(0, 1, Player::A, 2);
        board.claim(1, 1, Player::A, 3);
        assert_eq!(evaluate(&board, Player::A), -evaluate(&board, Player::B));
    }

    #[test]
    fn test_max_value_dominates_cell_count() {
        let mut board = Board::new(6);
        // A holds one cell with a high value, B holds many low cells
        board.claim(0, 0, Player::A, 5);
        board.claim(5, 5, Player::B, 1);
        board.claim(5, 4, Player::B, 2);
        board.claim(4, 4, Player::B, 3);
        board.claim(4, 5, Player::B, 2);
        assert!(evaluate(&board, Player::A) > 0);
    }

    #[test]
    fn test_cell_count_dominates_mobility() {
        let mut board = Board::new(6);
        // Equal max values; A occupies more cells but B has more room to move
        board.claim(0, 0, Player::A, 1);
        board.claim(0, 1, Player::A, 2);
        board.claim(1, 0, Player::A, 2);
        board.claim(1, 1, Player::A, 2);
        board.claim(3, 3, Player::B, 2);
        let score = evaluate(&board, Player::A);
        assert!(score > 0, "cell lead must outweigh mobility deficit: {score}");
    }

    #[test]
    fn test_mobility_breaks_ties() {
        let mut board = Board::new(6);
        // Same max, same cell count; corner cell has fewer empty neighbors
        board.claim(0, 0, Player::A, 1);
        board.claim(3, 3, Player::B, 1);
        assert_eq!(count_mobility(&board, Player::A), 3);
        assert_eq!(count_mobility(&board, Player::B), 8);
        assert_eq!(evaluate(&board, Player::A), 3 - 8);
    }

    #[test]
    fn test_mobility_suppresses_duplicates() {
        let mut board = Board::new(4);
        // (1,1) and (1,2) share empty neighbors; each counts once
        board.claim(1, 1, Player::A, 1);
        board.claim(1, 2, Player::A, 2);
        assert_eq!(count_mobility(&board, Player::A), 10);
    }

    #[test]
    fn test_mobility_ignores_occupied_cells() {
        let mut board = Board::new(3);
        board.claim(1, 1, Player::A, 1);
        board.claim(0, 0, Player::B, 1);
        board.claim(0, 1, Player::B, 2);
        assert_eq!(count_mobility(&board, Player::A), 6);
    }
}
