//! Depth-bounded minimax search with alpha-beta pruning
//!
//! The searcher explores the move tree to a fixed depth, pruning branches
//! that cannot affect the result and caching completed nodes in the
//! transposition table. Pruning and caching change the number of nodes
//! visited, never the score returned for a position.
//!
//! # Example
//!
//! ```
//! use sequencium::board::{Board, Player};
//! use sequencium::search::Searcher;
//!
//! let mut board = Board::standard(6);
//! let mut searcher = Searcher::with_table_slots(1 << 16);
//!
//! let result = searcher.search(&mut board, Player::A, 3);
//! let best = result.best_move.expect("opening position has moves");
//! assert_eq!(best.value, 2);
//! ```

use log::debug;

use crate::board::{Board, Player};
use crate::eval::evaluate;

use super::movegen::{generate_moves, order_moves, Move};
use super::tt::{EntryType, TTStats, TranspositionTable};

/// Alpha-beta window bound; far beyond any reachable evaluation
const INF: i32 = 1_000_000;

/// Result of a completed search
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move for the searched player, or `None` if they cannot move
    pub best_move: Option<Move>,
    /// Score of the position at the searched depth, from the searched
    /// player's perspective
    pub score: i32,
    /// Nodes visited during this search
    pub nodes: u64,
}

/// Minimax searcher owning a transposition table and a node counter.
///
/// Single-threaded: one searcher serves one search at a time. Concurrent
/// searches need their own instances; the table and counter are not
/// synchronized.
pub struct Searcher {
    tt: TranspositionTable,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default transposition table size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::new(),
            nodes: 0,
        }
    }

    /// Create a searcher with a specific transposition table slot count.
    #[must_use]
    pub fn with_table_slots(slots: usize) -> Self {
        Self {
            tt: TranspositionTable::with_slots(slots),
            nodes: 0,
        }
    }

    /// Search the position to the given depth for `player`.
    ///
    /// Blocks until the pruned tree is fully explored; depth is the only
    /// bound on runtime. Board mutations made while exploring are strictly
    /// nested and undone before returning.
    pub fn search(&mut self, board: &mut Board, player: Player, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = if depth == 0 {
            // A depth-0 root does no lookahead but still proposes the
            // best-ordered move alongside the static evaluation.
            self.nodes = 1;
            let score = evaluate(board, player);
            self.tt.store(board.hash(), 0, score, EntryType::Exact, None);
            let mut moves = generate_moves(board, player);
            order_moves(&mut moves, board, None);
            (score, moves.first().copied())
        } else {
            self.minimax(board, depth, -INF, INF, true, player)
        };
        debug!(
            "search done: player={player} depth={depth} score={score} nodes={} tt_used={}/{}",
            self.nodes,
            self.tt.stats().used,
            self.tt.stats().slots,
        );
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Node count of the most recent search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Reset the transposition table to empty.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Transposition table occupancy.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Recursive alpha-beta node.
    ///
    /// `player` is the side the root search favors and the perspective every
    /// score is expressed in; the current mover is derived from `maximizing`.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Player,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        let hash = board.hash();
        if let Some((score, best_move)) = self.tt.probe(hash, depth, alpha, beta) {
            return (score, best_move);
        }

        if depth == 0 {
            let score = evaluate(board, player);
            self.tt.store(hash, 0, score, EntryType::Exact, None);
            return (score, None);
        }

        let mover = if maximizing { player } else { player.opponent() };
        let mut moves = generate_moves(board, mover);

        if moves.is_empty() {
            if generate_moves(board, mover.opponent()).is_empty() {
                // Neither side can move: the game is over here
                let score = evaluate(board, player);
                self.tt.store(hash, depth, score, EntryType::Exact, None);
                return (score, None);
            }
            // Only the current mover is stuck: pass the turn. The child's
            // best move belongs to the opponent, so only the score rises.
            let (score, _) = self.minimax(board, depth - 1, alpha, beta, !maximizing, player);
            return (score, None);
        }

        order_moves(&mut moves, board, self.tt.best_move(hash));

        if maximizing {
            let mut best_score = -INF;
            let mut best_move = None;
            let mut cutoff = false;

            for mv in &moves {
                board.claim(mv.row, mv.col, mover, mv.value);
                let (score, _) = self.minimax(board, depth - 1, alpha, beta, false, player);
                board.retract(mv.row, mv.col, mover);

                if score > best_score {
                    best_score = score;
                    best_move = Some(*mv);
                }
                alpha = alpha.max(score);
                if alpha >= beta {
                    cutoff = true;
                    break;
                }
            }

            let bound = if cutoff {
                EntryType::LowerBound
            } else {
                EntryType::Exact
            };
            self.tt.store(hash, depth, best_score, bound, best_move);
            (best_score, best_move)
        } else {
            let mut best_score = INF;
            let mut best_move = None;
            let mut cutoff = false;

            for mv in &moves {
                board.claim(mv.row, mv.col, mover, mv.value);
                let (score, _) = self.minimax(board, depth - 1, alpha, beta, true, player);
                board.retract(mv.row, mv.col, mover);

                if score < best_score {
                    best_score = score;
                    best_move = Some(*mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    cutoff = true;
                    break;
                }
            }

            let bound = if cutoff {
                EntryType::UpperBound
            } else {
                EntryType::Exact
            };
            self.tt.store(hash, depth, best_score, bound, best_move);
            (best_score, best_move)
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
