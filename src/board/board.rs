//! Board structure with per-player maximum tracking
//!
//! The board is a fixed-capacity square grid with an explicit active size,
//! so search nodes never allocate. Alongside the grid it tracks, per player,
//! the maximum value currently on the board. That invariant is maintained by
//! [`Board::claim`] and [`Board::retract`] and is what the evaluator's
//! primary term reads.
//!
//! # Example
//!
//! ```
//! use sequencium::board::{Board, Player};
//!
//! let mut board = Board::standard(6);
//! assert_eq!(board.max_value(Player::A), 1);
//!
//! board.claim(0, 1, Player::A, 2);
//! assert_eq!(board.max_value(Player::A), 2);
//!
//! board.retract(0, 1, Player::A);
//! assert_eq!(board.max_value(Player::A), 1);
//! ```

use std::fmt;

use super::{Claim, Player, MAX_BOARD_SIZE};

/// Multiplier for the rolling position hash
const HASH_BASE: u64 = 131;

/// Sequencium game board: square grid plus per-player running maximum value
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    grid: [[Option<Claim>; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
    max_values: [u16; 2],
}

impl Board {
    /// Create an empty board with the given active side length.
    ///
    /// Callers go through [`crate::engine::SearchEngine`] for validated
    /// construction from external input; here the size is a precondition.
    #[must_use]
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1 && size <= MAX_BOARD_SIZE);
        Self {
            size,
            grid: [[None; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
            max_values: [0; 2],
        }
    }

    /// Create a board in the standard starting position: Player A seeded at
    /// the top-left corner, Player B at the bottom-right, both with value 1.
    /// Requires `size >= 2` so the two corners are distinct cells.
    #[must_use]
    pub fn standard(size: usize) -> Self {
        debug_assert!(size >= 2);
        let mut board = Self::new(size);
        board.claim(0, 0, Player::A, 1);
        board.claim(size - 1, size - 1, Player::B, 1);
        board
    }

    /// Active side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the claim at a cell, or `None` if empty
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Claim> {
        self.grid[row][col]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.grid[row][col].is_none()
    }

    /// Check if coordinates are on the active board
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    /// Claim an empty cell for a player, raising the player's tracked
    /// maximum if the new value exceeds it.
    #[inline]
    pub fn claim(&mut self, row: usize, col: usize, player: Player, value: u16) {
        debug_assert!(self.grid[row][col].is_none());
        self.grid[row][col] = Some(Claim { player, value });
        if value > self.max_values[player.index()] {
            self.max_values[player.index()] = value;
        }
    }

    /// Clear a cell and recompute the player's tracked maximum.
    ///
    /// The retracted cell may have held the maximum, so the whole grid is
    /// rescanned. O(size²), accepted for correctness of undo during search.
    pub fn retract(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(matches!(self.grid[row][col], Some(c) if c.player == player));
        self.grid[row][col] = None;

        let mut max = 0;
        for r in 0..self.size {
            for c in 0..self.size {
                if let Some(claim) = self.grid[r][c] {
                    if claim.player == player && claim.value > max {
                        max = claim.value;
                    }
                }
            }
        }
        self.max_values[player.index()] = max;
    }

    /// Maximum value the player currently holds on the board
    #[inline]
    pub fn max_value(&self, player: Player) -> u16 {
        self.max_values[player.index()]
    }

    /// Number of cells the player occupies
    pub fn cell_count(&self, player: Player) -> u32 {
        let mut count = 0;
        for r in 0..self.size {
            for c in 0..self.size {
                if matches!(self.grid[r][c], Some(claim) if claim.player == player) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Rolling 64-bit hash over the grid contents in row-major order.
    ///
    /// Equal grids always hash equal; the hash carries no side-to-move
    /// component. Used as the transposition table key only, so 64-bit
    /// collisions are possible and accepted.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut h: u64 = 0;
        for r in 0..self.size {
            for c in 0..self.size {
                let code = match self.grid[r][c] {
                    Some(claim) => u64::from(claim.player.id()) * 100 + u64::from(claim.value),
                    None => 0,
                };
                h = h.wrapping_mul(HASH_BASE).wrapping_add(code);
            }
        }
        h
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:3}")?;
        }
        writeln!(f)?;
        writeln!(f, "  +{}+", "---".repeat(self.size))?;
        for r in 0..self.size {
            write!(f, "{r:2}|")?;
            for c in 0..self.size {
                match self.grid[r][c] {
                    Some(claim) => write!(f, "{}{:2}", claim.player, claim.value)?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "  +{}+", "---".repeat(self.size))
    }
}
