//! Transposition table for caching search results
//!
//! Search results are cached in a fixed number of slots indexed by the
//! position hash. Each slot holds at most one entry (no chaining); a slot
//! conflict is resolved by a depth-preferred replacement policy, never by
//! probing further.
//!
//! # Example
//!
//! ```
//! use sequencium::search::{EntryType, Move, TranspositionTable};
//!
//! let mut tt = TranspositionTable::with_slots(1024);
//! let hash = 0x1234_5678_9ABC_DEF0;
//! tt.store(hash, 3, 120, EntryType::Exact, Some(Move::new(2, 2, 4)));
//!
//! let (score, best) = tt.probe(hash, 3, -1_000, 1_000).unwrap();
//! assert_eq!(score, 120);
//! assert_eq!(best, Some(Move::new(2, 2, 4)));
//! ```

use super::movegen::Move;

/// Default slot count (2^20)
pub const DEFAULT_TT_SLOTS: usize = 1 << 20;

/// How a cached score relates to the node's true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// The search at this node completed without a cutoff
    Exact,
    /// Beta cutoff: the true value is >= the stored score
    LowerBound,
    /// Alpha fail-low: the true value is <= the stored score
    UpperBound,
}

/// One cached search result
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Position hash the entry was stored under
    pub hash: u64,
    /// Remaining depth of the search that produced the score
    pub depth: u8,
    /// Cached score
    pub score: i32,
    /// Bound type of the score
    pub entry_type: EntryType,
    /// Best move found at this position, if any
    pub best_move: Option<Move>,
}

/// Hash-indexed cache of search results with depth-preferred replacement.
///
/// Slot conflicts between different positions silently overwrite per the
/// replacement policy. 64-bit hash collisions (two positions with the same
/// full hash) are not disambiguated further and can alias; accepted.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    slots: usize,
}

impl TranspositionTable {
    /// Create a table with the default slot count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_TT_SLOTS)
    }

    /// Create a table with a specific slot count (minimum 1).
    #[must_use]
    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            entries: vec![None; slots],
            slots,
        }
    }

    /// Probe the table for a position.
    ///
    /// Returns the cached score and move only when the stored hash matches,
    /// the stored depth is at least `depth`, and the bound type is valid
    /// against the caller's current (alpha, beta) window: exact entries are
    /// always usable, a lower bound only when it already fails high, an
    /// upper bound only when it already fails low. Anything else is a miss;
    /// use [`TranspositionTable::best_move`] for ordering on misses.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u8, alpha: i32, beta: i32) -> Option<(i32, Option<Move>)> {
        let entry = self.entries[self.index(hash)]?;
        if entry.hash != hash || entry.depth < depth {
            return None;
        }
        match entry.entry_type {
            EntryType::Exact => Some((entry.score, entry.best_move)),
            EntryType::LowerBound if entry.score >= beta => Some((entry.score, entry.best_move)),
            EntryType::UpperBound if entry.score <= alpha => Some((entry.score, entry.best_move)),
            _ => None,
        }
    }

    /// Get the remembered best move for a position, regardless of depth.
    ///
    /// Used for move ordering when the score itself is not usable.
    #[must_use]
    pub fn best_move(&self, hash: u64) -> Option<Move> {
        self.entries[self.index(hash)]
            .filter(|e| e.hash == hash)
            .and_then(|e| e.best_move)
    }

    /// Store a search result.
    ///
    /// Depth-preferred replacement: the slot is overwritten only if it is
    /// empty or the new search was at least as deep as the stored one.
    /// A deep result is never downgraded for a shallower one, not even
    /// for the same position.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u8,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Move>,
    ) {
        let idx = self.index(hash);
        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => depth >= e.depth,
        };
        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            });
        }
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Current table occupancy.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            slots: self.slots,
            used,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) % self.slots
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Transposition table occupancy statistics
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots
    pub slots: usize,
    /// Slots currently occupied
    pub used: usize,
}
