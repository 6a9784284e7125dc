//! Core rules engine: move legality, flip application and scoring.

use crate::board::Board;
use crate::common::{BoardError, Cell, Colour, Outcome};
use crate::config::DIRECTIONS;

/// Rules engine owning the shared board for one game.
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Create an engine over a freshly seeded board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
        })
    }

    /// Immutable reference to the board, for rendering and scoring.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable reference to the board, for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Attempt to place a `colour` disc at (`row`, `col`).
    ///
    /// The disc is placed provisionally, every direction holding a legal
    /// flip sequence is flipped, and the placement is reverted when no
    /// direction was legal. Returns `true` when the move stood; `false`
    /// leaves the board untouched. Out-of-bounds and occupied targets
    /// are rejections, not errors.
    pub fn try_move(&mut self, colour: Colour, row: usize, col: usize) -> bool {
        match self.board.get(row, col) {
            Ok(Cell::Empty) => {}
            // occupied by either colour, or outside the board
            _ => return false,
        }
        if self.board.set(row, col, Cell::Disc(colour)).is_err() {
            return false;
        }
        let mut legal_directions = 0;
        for &(d_row, d_col) in DIRECTIONS.iter() {
            if self.try_direction(colour, row, col, d_row, d_col) {
                legal_directions += 1;
            }
        }
        if legal_directions == 0 {
            // nothing flipped anywhere; take the provisional disc back
            let _ = self.board.set(row, col, Cell::Empty);
            return false;
        }
        true
    }

    /// Scan one direction from the placed disc at (`row`, `col`).
    ///
    /// A direction is legal when one or more opponent discs sit
    /// immediately adjacent and a disc of the mover's own colour
    /// terminates the run before any empty cell or the board edge. Every
    /// opponent disc strictly between origin and terminator is flipped;
    /// the terminator and anything beyond it stay untouched.
    fn try_direction(
        &mut self,
        colour: Colour,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
    ) -> bool {
        let opponent = Cell::Disc(colour.opponent());
        let mut run = 0isize;
        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;
        while self.board.in_bounds(r, c) {
            match self.board.get(r as usize, c as usize) {
                Ok(cell) if cell == opponent => run += 1,
                Ok(Cell::Disc(_)) => {
                    // own colour: a terminator only counts with opponent
                    // discs in between
                    if run == 0 {
                        return false;
                    }
                    for step in 1..=run {
                        let flip_row = (row as isize + d_row * step) as usize;
                        let flip_col = (col as isize + d_col * step) as usize;
                        let _ = self.board.set(flip_row, flip_col, Cell::Disc(colour));
                    }
                    return true;
                }
                // an empty cell breaks the sandwich
                _ => return false,
            }
            r += d_row;
            c += d_col;
        }
        // ran off the edge before a terminator
        false
    }

    /// Number of discs of `colour` currently on the board.
    pub fn score(&self, colour: Colour) -> usize {
        self.board.count(Cell::Disc(colour))
    }

    /// Compare the two scores to decide the current standing.
    pub fn outcome(&self) -> Outcome {
        let black = self.score(Colour::Black);
        let white = self.score(Colour::White);
        if black > white {
            Outcome::BlackWins
        } else if white > black {
            Outcome::WhiteWins
        } else {
            Outcome::Draw
        }
    }
}
