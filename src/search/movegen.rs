//! Legal-move generation and move ordering
//!
//! A player may claim any empty cell that is an 8-neighbor of one of their
//! occupied cells, writing the source cell's value + 1. When several owned
//! cells reach the same empty target, only the single highest achievable
//! value survives, so generation yields at most one move per target cell.

use crate::board::{Board, Player, MAX_BOARD_SIZE, NEIGHBOR_OFFSETS};

/// Ordering weight of the move's value
const ORDER_VALUE_WEIGHT: i32 = 1000;
/// Ordering weight per step of center proximity
const ORDER_CENTER_WEIGHT: i32 = 10;
/// Ordering boost for the transposition table's remembered best move
const ORDER_TT_BOOST: i32 = 1_000_000;

/// A candidate move: target cell and the value it would receive.
///
/// `score` is the ordering heuristic assigned by [`order_moves`]; it never
/// affects what a move *is*, so it is excluded from equality.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub value: u16,
    pub score: i32,
}

impl Move {
    #[inline]
    pub fn new(row: usize, col: usize, value: u16) -> Self {
        Self {
            row,
            col,
            value,
            score: 0,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col && self.value == other.value
    }
}

impl Eq for Move {}

/// Generate all legal moves for a player.
///
/// Output is deterministic: targets in row-major order, each annotated with
/// the maximum achievable value over all adjacent owned cells. An empty
/// result means the player cannot move; that is a pass, not an error.
#[must_use]
pub fn generate_moves(board: &Board, player: Player) -> Vec<Move> {
    // best[r][c] holds the highest value reaching (r, c), 0 = unreachable
    let mut best = [[0u16; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];

    for r in 0..board.size() {
        for c in 0..board.size() {
            let claim = match board.get(r, c) {
                Some(claim) if claim.player == player => claim,
                _ => continue,
            };
            let new_value = claim.value + 1;
            for (dr, dc) in NEIGHBOR_OFFSETS {
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                if board.in_bounds(nr, nc) {
                    let (nr, nc) = (nr as usize, nc as usize);
                    if board.is_empty(nr, nc) && new_value > best[nr][nc] {
                        best[nr][nc] = new_value;
                    }
                }
            }
        }
    }

    let mut moves = Vec::new();
    for r in 0..board.size() {
        for c in 0..board.size() {
            if best[r][c] > 0 {
                moves.push(Move::new(r, c, best[r][c]));
            }
        }
    }
    moves
}

/// Sort moves to improve alpha-beta cutoff rates.
///
/// Higher values first, then proximity to the board center (Manhattan
/// distance). A transposition-table move, when known for this node, is
/// boosted to the front. Ordering-only: the returned search score never
/// depends on it.
pub fn order_moves(moves: &mut [Move], board: &Board, tt_move: Option<Move>) {
    let size = board.size() as i32;
    let center = size / 2;

    for mv in moves.iter_mut() {
        let dist = (mv.row as i32 - center).abs() + (mv.col as i32 - center).abs();
        mv.score = i32::from(mv.value) * ORDER_VALUE_WEIGHT + (size - dist) * ORDER_CENTER_WEIGHT;
        if tt_move.is_some_and(|tt| tt.row == mv.row && tt.col == mv.col) {
            mv.score += ORDER_TT_BOOST;
        }
    }

    // Stable sort keeps equal-score moves in row-major order
    moves.sort_by(|a, b| b.score.cmp(&a.score));
}
