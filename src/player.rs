//! Player identity: colour, board symbol and display name.

use crate::common::Colour;

/// Immutable identity of one player. Exactly two of these exist for the
/// lifetime of a game (see [`crate::config::PLAYERS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    colour: Colour,
    symbol: char,
    name: &'static str,
}

impl Player {
    /// Create a new player record.
    pub const fn new(colour: Colour, symbol: char, name: &'static str) -> Self {
        Self {
            colour,
            symbol,
            name,
        }
    }

    /// Player's disc colour.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Single character used to render this player's discs.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Player's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
