//! Tests for reading and writing move notation.

use strictly_scrabble::{Board, Move, MoveError, NotationError, Position, Tile, TileError};

#[test]
fn test_parse_horizontal_move() {
    let mov: Move = "8H ABANDON".parse().unwrap();
    assert_eq!(mov.len(), 7);
    assert_eq!(mov.start(), Position::new(7, 7));
    assert_eq!(mov.end(), Position::new(7, 13));
}

#[test]
fn test_parse_vertical_move_with_play_through() {
    let mov: Move = "G5 TIL.".parse().unwrap();
    assert_eq!(mov.len(), 3);
    assert_eq!(mov.end(), Position::new(6, 6));
}

#[test]
fn test_parse_blanks() {
    let mov: Move = "8D QiNDARS".parse().unwrap();
    let blank = mov.iter().nth(1).unwrap();
    assert!(blank.tile.is_blank());
    assert_eq!(blank.tile.letter(), Some('I'));

    let mov: Move = "F8 .NSI?T".parse().unwrap();
    assert_eq!(mov.unset_blanks(), 1);
}

#[test]
fn test_parse_rejects_wrong_token_count() {
    for text in ["8H", "8H CAT DOG", ""] {
        assert!(matches!(text.parse::<Move>(), Err(NotationError::Malformed(_))));
    }
}

#[test]
fn test_parse_rejects_bad_symbol() {
    assert_eq!(
        "8H C-T".parse::<Move>(),
        Err(NotationError::Tile(TileError::InvalidLetter('-')))
    );
}

#[test]
fn test_parse_rejects_too_long_move() {
    assert_eq!(
        "8A ABCDEFGH".parse::<Move>(),
        Err(NotationError::Move(MoveError::TooManyTiles(8)))
    );
}

#[test]
fn test_display_round_trip() {
    for text in ["8H ABANDON", "G5 TIL", "10I AFF.E", "8D QiNDARS", "F9 NSI?T"] {
        let mov: Move = text.parse().unwrap();
        assert_eq!(mov.to_string(), text);
    }
}

#[test]
fn test_display_of_ill_formed_move() {
    let mov = Move::new([
        strictly_scrabble::Placement::new(Tile::new('P').unwrap(), Position::new(0, 0)),
        strictly_scrabble::Placement::new(Tile::new('U').unwrap(), Position::new(1, 1)),
    ])
    .unwrap();
    assert_eq!(mov.to_string(), "[P@1A, U@2B]");
}

#[test]
fn test_format_move_restores_full_span() {
    let mut board = Board::new();
    let game = ["8G TO", "G5 TIL.", "7F I.L", "6F Q."];
    for text in game {
        board.apply_move(text.parse().unwrap()).unwrap();
    }
    for (index, text) in game.iter().enumerate() {
        assert_eq!(board.format_move(index as isize).unwrap(), *text);
    }
}

#[test]
fn test_format_move_leading_play_through() {
    let mut board = Board::new();
    board.apply_move("8C AQUiVER".parse().unwrap()).unwrap();
    board.apply_move("F8 .NSI?T".parse().unwrap()).unwrap();
    assert_eq!(board.format_move(-1).unwrap(), "F8 .NSI?T");

    board.set_blanks("s").unwrap();
    assert_eq!(board.format_move(-1).unwrap(), "F8 .NSIsT");
    assert_eq!(board.format_move(0).unwrap(), "8C AQUiVER");
}

#[test]
fn test_format_move_lone_tile_follows_its_word() {
    let mut board = Board::new();
    board.apply_move("8H AT".parse().unwrap()).unwrap();
    board.apply_move("9H S".parse().unwrap()).unwrap();
    assert_eq!(board.format_move(-1).unwrap(), "H8 .S");
}
