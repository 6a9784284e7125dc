use othello::{cli, Colour, GameEngine, MoveCommand};

#[test]
fn test_letter_to_index_mapping() {
    assert_eq!(cli::letter_to_index('a'), Some(0));
    assert_eq!(cli::letter_to_index('b'), Some(1));
    assert_eq!(cli::letter_to_index('z'), Some(25));
    assert_eq!(cli::letter_to_index('H'), Some(7));
    assert_eq!(cli::letter_to_index('3'), None);
    assert_eq!(cli::letter_to_index('!'), None);
}

#[test]
fn test_parse_move_commands() {
    assert_eq!(cli::parse_move("quit"), Some(MoveCommand::Quit));
    assert_eq!(cli::parse_move("skip"), Some(MoveCommand::Skip));
    assert_eq!(cli::parse_move("ce"), Some(MoveCommand::Position(2, 4)));
    assert_eq!(cli::parse_move("aa"), Some(MoveCommand::Position(0, 0)));
    assert_eq!(cli::parse_move("zz"), Some(MoveCommand::Position(25, 25)));
}

#[test]
fn test_parse_move_rejects_bad_input() {
    assert_eq!(cli::parse_move(""), None);
    assert_eq!(cli::parse_move("a"), None);
    assert_eq!(cli::parse_move("abc"), None);
    assert_eq!(cli::parse_move("a1"), None);
    assert_eq!(cli::parse_move("stop"), None);
}

/// Opening fixture: standard 8x8 seeding, White to move first. `ce`
/// lands on (2, 4), flips exactly one Black disc, and the scores go
/// from 2/2 to White 4, Black 1.
#[test]
fn test_first_move_fixture() {
    let mut engine = GameEngine::new(8, 8).unwrap();
    assert_eq!(engine.score(Colour::Black), 2);
    assert_eq!(engine.score(Colour::White), 2);

    let (row, col) = match cli::parse_move("ce") {
        Some(MoveCommand::Position(row, col)) => (row, col),
        other => panic!("expected a coordinate, got {:?}", other),
    };
    assert!(engine.try_move(Colour::White, row, col));

    assert_eq!(engine.score(Colour::White), 4);
    assert_eq!(engine.score(Colour::Black), 1);
}

/// A coordinate that parses fine but holds no sandwich is rejected by
/// the engine and the same player keeps the turn.
#[test]
fn test_parsed_move_can_still_be_illegal() {
    let mut engine = GameEngine::new(8, 8).unwrap();
    let (row, col) = match cli::parse_move("aa") {
        Some(MoveCommand::Position(row, col)) => (row, col),
        other => panic!("expected a coordinate, got {:?}", other),
    };
    assert!(!engine.try_move(Colour::White, row, col));
    assert_eq!(engine.score(Colour::Black), 2);
    assert_eq!(engine.score(Colour::White), 2);
}
