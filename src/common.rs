//! Common types for Othello: disc colours, cell states and board errors.

use core::fmt;

/// Disc colour of one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Black,
    White,
}

impl Colour {
    /// The colour on the other side of the sandwich.
    pub fn opponent(self) -> Self {
        match self {
            Colour::Black => Colour::White,
            Colour::White => Colour::Black,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::Black => write!(f, "Black"),
            Colour::White => write!(f, "White"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Disc(Colour),
}

impl Cell {
    /// `true` when no disc occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Final standing of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimension is odd or outside the supported range.
    InvalidDimension,
    /// Cell coordinate lies outside the board.
    OutOfBounds,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimension => {
                write!(f, "Board dimensions must be even and between 4 and 26")
            }
            BoardError::OutOfBounds => write!(f, "Cell coordinate is outside the board"),
        }
    }
}
