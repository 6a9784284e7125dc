use crate::common::Colour;
use crate::player::Player;

/// Smallest supported board dimension.
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest supported board dimension (coordinates are entered as single
/// letters `a`..`z`).
pub const MAX_BOARD_SIZE: usize = 26;

pub const NUM_PLAYERS: usize = 2;
pub const PLAYERS: [Player; NUM_PLAYERS] = [
    Player::new(Colour::Black, 'X', "Black"),
    Player::new(Colour::White, 'O', "White"),
];

/// The eight directions a flip sequence can run in, as (row, col) steps.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// `true` when `size` is usable as a board dimension: even, so the four
/// seed discs sit at the exact centre, and within the supported range.
pub fn dimension_ok(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) && size % 2 == 0
}

/// The fixed player record for a colour.
pub fn player_for(colour: Colour) -> Player {
    match colour {
        Colour::Black => PLAYERS[0],
        Colour::White => PLAYERS[1],
    }
}
