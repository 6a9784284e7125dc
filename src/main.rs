#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use othello::{
    cli, dimension_ok, GameEngine, MoveCommand, NUM_PLAYERS, PLAYERS,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player console Othello", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of board rows (even, 4-26). Prompted for when absent.
    #[arg(long)]
    rows: Option<usize>,
    /// Number of board columns (even, 4-26). Prompted for when absent.
    #[arg(long)]
    cols: Option<usize>,
    /// Player moving first: 0 = Black, 1 = White. Prompted for when absent.
    #[arg(long)]
    first: Option<usize>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    othello::init_logging();

    cli::welcome();

    let first_turn = match args.first {
        Some(turn) if turn < NUM_PLAYERS => turn,
        Some(turn) => anyhow::bail!("--first must be 0 (Black) or 1 (White), got {}", turn),
        None => cli::get_first_turn()?,
    };
    let rows = match args.rows {
        Some(rows) if dimension_ok(rows) => rows,
        Some(rows) => anyhow::bail!("--rows must be even and 4-26, got {}", rows),
        None => cli::get_board_size("rows")?,
    };
    let cols = match args.cols {
        Some(cols) if dimension_ok(cols) => cols,
        Some(cols) => anyhow::bail!("--cols must be even and 4-26, got {}", cols),
        None => cli::get_board_size("columns")?,
    };

    let mut engine = GameEngine::new(rows, cols).map_err(|e| anyhow::anyhow!(e))?;
    log::info!("Starting a {}x{} game, {} moves first", rows, cols, PLAYERS[first_turn].name());

    run_game(&mut engine, first_turn)?;
    Ok(())
}

/// Alternate turns until a player quits, then show the final results.
#[cfg(feature = "std")]
fn run_game(engine: &mut GameEngine, mut turn: usize) -> anyhow::Result<()> {
    loop {
        println!();
        cli::print_board(engine.board());
        cli::display_scores(engine);

        let player = PLAYERS[turn];
        match cli::get_move(&player)? {
            MoveCommand::Quit => break,
            MoveCommand::Skip => {
                log::info!("{} skips their turn", player.name());
                turn = (turn + 1) % NUM_PLAYERS;
            }
            MoveCommand::Position(row, col) => {
                if engine.try_move(player.colour(), row, col) {
                    log::debug!("{} placed a disc at ({}, {})", player.name(), row, col);
                    turn = (turn + 1) % NUM_PLAYERS;
                } else {
                    log::debug!("{} rejected at ({}, {})", player.name(), row, col);
                    cli::rejected_move()?;
                }
            }
        }
    }

    cli::display_winners(engine);
    println!();
    Ok(())
}
