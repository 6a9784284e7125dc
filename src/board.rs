//! Game board state: a `rows × cols` grid of cells seeded with the
//! standard Othello four-disc opening.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{BoardError, Cell, Colour};
use crate::config::dimension_ok;

/// Main board state: disc positions for both players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board seeded with the four centre discs: White on the
    /// centre square's main diagonal, Black on the anti-diagonal. Both
    /// dimensions must be even and within `[4, 26]`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if !dimension_ok(rows) || !dimension_ok(cols) {
            return Err(BoardError::InvalidDimension);
        }
        let mut board = Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        };
        let (r, c) = (rows / 2 - 1, cols / 2 - 1);
        board.cells[r * cols + c] = Cell::Disc(Colour::White);
        board.cells[r * cols + c + 1] = Cell::Disc(Colour::Black);
        board.cells[(r + 1) * cols + c] = Cell::Disc(Colour::Black);
        board.cells[(r + 1) * cols + c + 1] = Cell::Disc(Colour::White);
        Ok(board)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` when the signed coordinate lies on the board.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Read the cell at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// Overwrite the cell at (`row`, `col`). Only the rules engine
    /// mutates cells during play; moves are placed and flipped through
    /// it so the board never keeps a disc that flipped nothing.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds);
        }
        self.cells[row * self.cols + col] = cell;
        Ok(())
    }

    /// Number of cells currently equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}
