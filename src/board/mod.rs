//! Board representation for Sequencium

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: usize = 10;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the opposing player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Numeric id used by the external grid representation (A = 1, B = 2)
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }

    /// Parse an external player id
    #[inline]
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::A),
            2 => Some(Player::B),
            _ => None,
        }
    }

    /// Index into per-player arrays
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// A claimed cell: the owning player and the value written when claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub player: Player,
    pub value: u16,
}

/// The 8 neighbor offsets of a cell
pub(crate) const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
