use othello::{Board, BoardError, Cell, Colour};

#[test]
fn test_new_board_seeds_centre() {
    let board = Board::new(8, 8).unwrap();
    assert_eq!(board.get(3, 3).unwrap(), Cell::Disc(Colour::White));
    assert_eq!(board.get(3, 4).unwrap(), Cell::Disc(Colour::Black));
    assert_eq!(board.get(4, 3).unwrap(), Cell::Disc(Colour::Black));
    assert_eq!(board.get(4, 4).unwrap(), Cell::Disc(Colour::White));
    assert_eq!(board.count(Cell::Disc(Colour::Black)), 2);
    assert_eq!(board.count(Cell::Disc(Colour::White)), 2);
    assert_eq!(board.count(Cell::Empty), 8 * 8 - 4);
}

#[test]
fn test_new_board_rectangular_seeding() {
    let board = Board::new(6, 10).unwrap();
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.get(2, 4).unwrap(), Cell::Disc(Colour::White));
    assert_eq!(board.get(2, 5).unwrap(), Cell::Disc(Colour::Black));
    assert_eq!(board.get(3, 4).unwrap(), Cell::Disc(Colour::Black));
    assert_eq!(board.get(3, 5).unwrap(), Cell::Disc(Colour::White));
    assert_eq!(board.count(Cell::Empty), 6 * 10 - 4);
}

#[test]
fn test_new_board_rejects_bad_dimensions() {
    assert_eq!(Board::new(7, 8).unwrap_err(), BoardError::InvalidDimension);
    assert_eq!(Board::new(8, 7).unwrap_err(), BoardError::InvalidDimension);
    assert_eq!(Board::new(2, 8).unwrap_err(), BoardError::InvalidDimension);
    assert_eq!(Board::new(8, 28).unwrap_err(), BoardError::InvalidDimension);
    assert_eq!(Board::new(0, 0).unwrap_err(), BoardError::InvalidDimension);
    assert!(Board::new(4, 4).is_ok());
    assert!(Board::new(26, 26).is_ok());
}

#[test]
fn test_get_set_bounds_checked() {
    let mut board = Board::new(4, 4).unwrap();
    assert_eq!(board.get(4, 0).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(board.get(0, 4).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(
        board.set(4, 0, Cell::Disc(Colour::Black)).unwrap_err(),
        BoardError::OutOfBounds
    );

    board.set(0, 0, Cell::Disc(Colour::Black)).unwrap();
    assert_eq!(board.get(0, 0).unwrap(), Cell::Disc(Colour::Black));
    board.set(0, 0, Cell::Empty).unwrap();
    assert_eq!(board.get(0, 0).unwrap(), Cell::Empty);
}

#[test]
fn test_in_bounds() {
    let board = Board::new(6, 8).unwrap();
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(5, 7));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(!board.in_bounds(6, 0));
    assert!(!board.in_bounds(0, 8));
}
