//! Game board state: nine cells and the pure rules over them.

use crate::common::{BoardError, Cell, Player};
use crate::config::{BOARD_SIZE, NUM_CELLS, WINNING_LINES};
use core::fmt;

/// The 3x3 grid, indexed row-major from 0 to 8.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Immutable view of all cells.
    pub fn cells(&self) -> [Cell; NUM_CELLS] {
        self.cells
    }

    /// Contents of the cell at `index`, or `None` when off the grid.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Mark the cell at `index` for `player`.
    pub fn make_move(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        let slot = self.cells.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        if !slot.is_empty() {
            return Err(BoardError::CellOccupied);
        }
        *slot = Cell::Mark(player);
        Ok(())
    }

    /// Returns `true` when any row, column or diagonal is held by one player.
    pub fn check_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let p = self.cells[a].player()?;
            (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a]).then_some(p)
        })
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; NUM_CELLS];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{\n{}}}", self)
    }
}
