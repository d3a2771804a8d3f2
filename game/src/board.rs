use crate::types::{Mark, WinningLine};
use crate::win_detector::{check_win, find_winning_line};

pub const CELL_COUNT: usize = 9;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Places `mark` at `index`. Returns false without touching the board
    /// when the index is out of range or the cell is already occupied.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        if index >= CELL_COUNT {
            return false;
        }
        if self.cells[index] != Mark::Empty {
            return false;
        }

        self.cells[index] = mark;
        true
    }

    /// Indices of empty cells in ascending order. Empty on a full board.
    pub fn empty_slots(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn has_winner(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.cells)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
