#![cfg(feature = "std")]

//! Console interface: prompts, move parsing and board rendering.

use std::io::{self, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Cell, Colour, Outcome},
    config::{dimension_ok, player_for, NUM_PLAYERS, PLAYERS},
    player::Player,
    GameEngine,
};

/// One validated instruction from the player at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// End the game.
    Quit,
    /// Pass the turn without touching the board.
    Skip,
    /// Place a disc at (row, col).
    Position(usize, usize),
}

/// Map a coordinate letter to its index: `a` is 0, `b` is 1, and so on.
/// Uppercase input is accepted.
pub fn letter_to_index(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

/// Parse one line of player input: `quit`, `skip`, or a two-letter
/// row-col coordinate pair.
pub fn parse_move(input: &str) -> Option<MoveCommand> {
    match input {
        "quit" => return Some(MoveCommand::Quit),
        "skip" => return Some(MoveCommand::Skip),
        _ => {}
    }
    let mut chars = input.chars();
    let row = letter_to_index(chars.next()?)?;
    let col = letter_to_index(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(MoveCommand::Position(row, col))
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Display common text for the top of the screen.
pub fn welcome() {
    println!();
    println!(
        "***********************************  \
         Welcome to Othello! Good luck and have fun!  \
         ***********************************"
    );
    println!();
}

/// Ask which player goes first; re-prompt until 0 or 1 is entered.
pub fn get_first_turn() -> io::Result<usize> {
    print!(
        "Which player would like to go first? Enter <0> for Player {} ('{}') \
         or <1> for Player {} ('{}'): ",
        PLAYERS[0].name(),
        PLAYERS[0].symbol(),
        PLAYERS[1].name(),
        PLAYERS[1].symbol()
    );
    io::stdout().flush()?;
    loop {
        match read_line()?.parse::<usize>() {
            Ok(turn) if turn < NUM_PLAYERS => return Ok(turn),
            _ => {
                print!("Invalid input. Please re-enter your selection of <0> or <1>: ");
                io::stdout().flush()?;
            }
        }
    }
}

/// Ask for one board dimension; re-prompt until it is even and in range.
pub fn get_board_size(direction: &str) -> io::Result<usize> {
    print!("Enter the number of desired board {} (4-26, even #): ", direction);
    io::stdout().flush()?;
    loop {
        match read_line()?.parse::<usize>() {
            Ok(size) if dimension_ok(size) => return Ok(size),
            _ => {
                print!("Invalid board size. Please re-enter a size: ");
                io::stdout().flush()?;
            }
        }
    }
}

/// Ask the player for a move; re-prompt until the input parses.
pub fn get_move(player: &Player) -> io::Result<MoveCommand> {
    println!(
        "Player {}: Enter two letters (row-col) to make a move, \
         <skip> to skip your turn, or <quit> to quit the game.",
        player.name()
    );
    print!("Enter your choice: ");
    io::stdout().flush()?;
    loop {
        if let Some(command) = parse_move(&read_line()?) {
            return Ok(command);
        }
        print!("Invalid move. Please re-enter your choice: ");
        io::stdout().flush()?;
    }
}

/// Tell the player a move was rejected and wait for enter.
pub fn rejected_move() -> io::Result<()> {
    print!("Your choice didn't work! Press <Enter> to try again.");
    io::stdout().flush()?;
    read_line()?;
    Ok(())
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Disc(colour) => player_for(colour).symbol(),
    }
}

/// Render the board with letter axes on both edges.
pub fn print_board(board: &Board) {
    print!("   ");
    for c in 0..board.cols() {
        let ch = (b'a' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..board.rows() {
        let ch = (b'a' + r as u8) as char;
        print!(" {} ", ch);
        for c in 0..board.cols() {
            let cell = board.get(r, c).unwrap_or(Cell::Empty);
            print!(" {}", cell_symbol(cell));
        }
        println!();
    }
}

/// Display a line of scores for both players.
pub fn display_scores(engine: &GameEngine) {
    println!();
    println!("--------------------------------  SCORES  --------------------------------");
    for player in PLAYERS.iter() {
        println!("Player {}: {}", player.name(), engine.score(player.colour()));
    }
    println!("--------------------------------------------------------------------------");
    println!();
}

/// Display the winner and the final scores.
pub fn display_winners(engine: &GameEngine) {
    println!();
    println!(
        "******************************************************  WINNER  \
         *****************************************************"
    );
    println!();
    match engine.outcome() {
        Outcome::BlackWins => {
            println!("Player Black wins! Congratulations and better luck next time, White!")
        }
        Outcome::WhiteWins => {
            println!("Player White wins! Congratulations and better luck next time, Black!")
        }
        Outcome::Draw => println!("It's a tie! Good try to both players! :)"),
    }
    println!();
    println!("FINAL SCORES");
    println!();
    println!("Player Black: {}", engine.score(Colour::Black));
    println!("Player White: {}", engine.score(Colour::White));
    println!();
    println!(
        "********************************************  \
         Play again soon! Goodbye!  \
         ********************************************"
    );
}
