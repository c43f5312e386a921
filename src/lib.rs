//! Sequencium move-search engine
//!
//! Sequencium (Walter Joris) is a two-player game on a square grid: each
//! player grows a chain of increasing integers by claiming empty cells
//! adjacent to cells they already own, and the game ends when neither
//! player can move. This crate finds, for a given position and search
//! depth, the move judged best for a designated player.
//!
//! # Architecture
//!
//! - [`board`]: fixed-capacity grid with per-player maximum tracking and
//!   the position hash
//! - [`rules`]: game-level rules (legality, game end, winner) for callers
//!   that drive a real game
//! - [`eval`]: static position evaluation (max value, cell count, mobility)
//! - [`search`]: move generation, move ordering, transposition table, and
//!   the alpha-beta driver
//! - [`engine`]: the validated external entry point
//!
//! # Quick Start
//!
//! ```
//! use sequencium::{Board, Player, SearchEngine};
//!
//! let mut board = Board::standard(6);
//! let mut engine = SearchEngine::with_table_slots(1 << 16);
//!
//! let result = engine.search(&mut board, Player::A, 4);
//! let best = result.best_move.expect("opening position has moves");
//! println!("play ({}, {}) = {}", best.row, best.col, best.value);
//! ```
//!
//! Searches are synchronous and single-threaded; depth is the only bound
//! on runtime. Each engine instance owns its transposition table and node
//! counter, so concurrent searches need separate instances.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Claim, Player, MAX_BOARD_SIZE};
pub use engine::{BestMove, EngineError, GridCell, SearchEngine};
pub use search::{Move, SearchResult, Searcher};
