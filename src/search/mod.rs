//! Search algorithms: move generation, ordering, transposition table,
//! and the alpha-beta driver

pub mod alphabeta;
pub mod movegen;
pub mod tt;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::{generate_moves, order_moves, Move};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable, DEFAULT_TT_SLOTS};
