//! Engine facade tying the search components together
//!
//! [`SearchEngine`] owns a [`Searcher`] (and through it the transposition
//! table and node counter) and offers two entry points: a raw-grid
//! interface matching the external caller contract, and a typed interface
//! for callers that already hold a [`Board`]. The raw interface is the only
//! place input is validated; everything below it trusts its arguments.
//!
//! # Example
//!
//! ```
//! use sequencium::engine::SearchEngine;
//!
//! // 3x3 board with a single cell owned by player 1, value 5
//! let mut cells = vec![vec![None; 3]; 3];
//! cells[1][1] = Some((1, 5));
//!
//! let mut engine = SearchEngine::with_table_slots(1 << 16);
//! let best = engine.find_best_move(&cells, 3, 1, 1).unwrap();
//! assert_eq!(best.mv.unwrap().value, 6);
//! ```

use thiserror::Error;

use crate::board::{Board, Player, MAX_BOARD_SIZE};
use crate::search::{Move, SearchResult, Searcher};

/// External grid cell: `None` for empty, `(player_id, value)` otherwise
pub type GridCell = Option<(u8, u16)>;

/// Rejected-input errors, reported before any search work begins
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("board size {size} out of range (1..={MAX_BOARD_SIZE})")]
    BoardSizeOutOfRange { size: usize },
    #[error("grid has {rows} rows, expected {expected}")]
    BadRowCount { rows: usize, expected: usize },
    #[error("row {row} has {cols} cells, expected {expected}")]
    BadRowLength {
        row: usize,
        cols: usize,
        expected: usize,
    },
    #[error("invalid player id {id} at ({row}, {col})")]
    InvalidPlayer { row: usize, col: usize, id: u8 },
    #[error("invalid value {value} at ({row}, {col}), must be >= 1")]
    InvalidValue { row: usize, col: usize, value: u16 },
    #[error("invalid player id {id} for the searched player")]
    InvalidSearchPlayer { id: u8 },
}

/// Best move report for the raw-grid interface
#[derive(Debug, Clone, Copy)]
pub struct BestMove {
    /// The chosen move, or `None` when the searched player cannot move
    pub mv: Option<Move>,
    /// Score of the position at the searched depth
    pub score: i32,
    /// Nodes visited during the search
    pub nodes: u64,
}

/// Move-search engine for Sequencium positions.
///
/// Owns its transposition table and node counter; state persists across
/// searches of the same instance until [`SearchEngine::clear_cache`] is
/// called. Not meant to be shared between concurrent searches.
pub struct SearchEngine {
    searcher: Searcher,
}

impl SearchEngine {
    /// Engine with the default transposition table size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Engine with a specific transposition table slot count.
    #[must_use]
    pub fn with_table_slots(slots: usize) -> Self {
        Self {
            searcher: Searcher::with_table_slots(slots),
        }
    }

    /// Find the best move for `player_id` on an externally represented grid.
    ///
    /// The grid is validated (dimensions, player ids, values) and converted
    /// into a [`Board`] before the search runs; malformed input is rejected
    /// with an [`EngineError`] without visiting a single node. A position
    /// where `player_id` has no legal move yields `mv: None` rather than a
    /// sentinel move.
    pub fn find_best_move(
        &mut self,
        cells: &[Vec<GridCell>],
        size: usize,
        player_id: u8,
        depth: u8,
    ) -> Result<BestMove, EngineError> {
        let player =
            Player::from_id(player_id).ok_or(EngineError::InvalidSearchPlayer { id: player_id })?;
        let mut board = build_board(cells, size)?;
        let result = self.searcher.search(&mut board, player, depth);
        Ok(BestMove {
            mv: result.best_move,
            score: result.score,
            nodes: result.nodes,
        })
    }

    /// Typed entry point: search a board the caller already constructed.
    pub fn search(&mut self, board: &mut Board, player: Player, depth: u8) -> SearchResult {
        self.searcher.search(board, player, depth)
    }

    /// Reset the transposition table to empty.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_tt();
    }

    /// Node count of the most recent search.
    #[must_use]
    pub fn nodes_evaluated(&self) -> u64 {
        self.searcher.nodes()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate an external grid and build the internal board from it.
fn build_board(cells: &[Vec<GridCell>], size: usize) -> Result<Board, EngineError> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(EngineError::BoardSizeOutOfRange { size });
    }
    if cells.len() != size {
        return Err(EngineError::BadRowCount {
            rows: cells.len(),
            expected: size,
        });
    }
    for (row, row_cells) in cells.iter().enumerate() {
        if row_cells.len() != size {
            return Err(EngineError::BadRowLength {
                row,
                cols: row_cells.len(),
                expected: size,
            });
        }
    }

    let mut board = Board::new(size);
    for (row, row_cells) in cells.iter().enumerate() {
        for (col, cell) in row_cells.iter().enumerate() {
            let Some((id, value)) = *cell else { continue };
            let player = Player::from_id(id).ok_or(EngineError::InvalidPlayer { row, col, id })?;
            if value == 0 {
                return Err(EngineError::InvalidValue { row, col, value });
            }
            board.claim(row, col, player, value);
        }
    }
    Ok(board)
}
