//! Common types for tic-tac-toe: players, cell marks and board errors.

use crate::config::BOARD_SIZE;

/// One of the two players. `First` plays "X" and always opens a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Conventional label shown to users.
    pub const fn label(self) -> &'static str {
        match self {
            Player::First => "X",
            Player::Second => "O",
        }
    }

    /// The opponent of this player.
    pub const fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(p) => Some(p),
        }
    }

    /// Single character used by text renderers.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(Player::First) => 'X',
            Cell::Mark(Player::Second) => 'O',
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside the grid.
    InvalidIndex,
    /// Cell already carries a mark.
    CellOccupied,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Invalid move: no such cell"),
            BoardError::CellOccupied => write!(f, "Invalid move: cell is already occupied"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Convert a cell index into its (row, col) position.
pub const fn index_to_coord(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Convert a (row, col) position into a cell index, if it lies on the grid.
pub const fn coord_to_index(row: usize, col: usize) -> Option<usize> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Some(row * BOARD_SIZE + col)
    } else {
        None
    }
}
