//! Tests for building and inspecting moves.

use strictly_scrabble::{Direction, MAX_TILES, Move, MoveError, Placement, Position, Tile, TileError};

fn place(letter: char, row: i32, col: i32) -> Placement {
    Placement::new(Tile::new(letter).unwrap(), Position::new(row, col))
}

#[test]
fn test_empty_move_rejected() {
    assert_eq!(Move::new(Vec::new()), Err(MoveError::Empty));
}

#[test]
fn test_too_many_tiles_rejected() {
    let placements = (0..=MAX_TILES as i32).map(|col| place('A', 7, col));
    assert_eq!(Move::new(placements), Err(MoveError::TooManyTiles(8)));
}

#[test]
fn test_placements_sorted_by_position() {
    let mov = Move::new([place('T', 7, 9), place('P', 7, 7), place('U', 7, 8)]).unwrap();
    let letters: String = mov.iter().filter_map(|p| p.tile.letter()).collect();
    assert_eq!(letters, "PUT");
    assert_eq!(mov.start(), Position::new(7, 7));
    assert_eq!(mov.end(), Position::new(7, 9));
}

#[test]
fn test_diagonal_move_is_invalid() {
    let mov = Move::new([place('P', 7, 7), place('U', 8, 8), place('T', 7, 9)]).unwrap();
    assert!(!mov.is_valid());
}

#[test]
fn test_duplicate_square_is_invalid() {
    let mov = Move::new([place('A', 3, 3), place('B', 3, 3)]).unwrap();
    assert!(!mov.is_valid());
    assert_eq!(mov.first_duplicate(), Some(Position::new(3, 3)));
}

#[test]
fn test_direction() {
    let across = Move::new([place('A', 2, 2), place('B', 2, 5)]).unwrap();
    assert_eq!(across.direction(), Direction::Horizontal);

    let down = Move::new([place('A', 2, 2), place('B', 4, 2)]).unwrap();
    assert_eq!(down.direction(), Direction::Vertical);

    let single = Move::new([place('A', 2, 2)]).unwrap();
    assert_eq!(single.direction(), Direction::Horizontal);
}

#[test]
#[should_panic(expected = "invalid move")]
fn test_direction_of_invalid_move_panics() {
    let mov = Move::new([place('P', 7, 7), place('U', 8, 8)]).unwrap();
    mov.direction();
}

#[test]
fn test_equality_ignores_input_order() {
    let a = Move::new([place('A', 1, 1), place('B', 1, 2)]).unwrap();
    let b = Move::new([place('B', 1, 2), place('A', 1, 1)]).unwrap();
    assert_eq!(a, b);

    let c = Move::new([place('A', 1, 1), place('C', 1, 2)]).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_covers() {
    let mov: Move = "8H CAT".parse().unwrap();
    assert!(mov.covers(Position::new(7, 8)));
    assert!(!mov.covers(Position::new(7, 10)));
}

#[test]
fn test_set_blanks_in_board_order() {
    let mut mov: Move = "8H ?A?".parse().unwrap();
    assert_eq!(mov.unset_blanks(), 2);

    mov.set_blanks("cT").unwrap();
    assert_eq!(mov.unset_blanks(), 0);
    assert_eq!(mov.to_string(), "8H cAt");
}

#[test]
fn test_set_blanks_wrong_count_changes_nothing() {
    let mut mov: Move = "8H ?A?".parse().unwrap();
    assert_eq!(
        mov.set_blanks("c"),
        Err(MoveError::BlankCountMismatch { expected: 2, got: 1 })
    );
    assert_eq!(mov.unset_blanks(), 2);
}

#[test]
fn test_set_blanks_bad_letter_changes_nothing() {
    let mut mov: Move = "8H ?A?".parse().unwrap();
    assert_eq!(
        mov.set_blanks("c!"),
        Err(MoveError::Tile(TileError::InvalidBlankLetter('!')))
    );
    assert_eq!(mov.unset_blanks(), 2);
}

#[test]
fn test_set_blanks_with_nothing_to_resolve() {
    let mut mov: Move = "8H CAT".parse().unwrap();
    assert!(mov.set_blanks("").is_ok());
    assert!(mov.set_blanks("s").is_err());
}

// ─────────────────────────────────────────────────────────────
//  Deserialization
// ─────────────────────────────────────────────────────────────

#[test]
fn test_deserialize_rejects_empty_move() {
    let result = serde_json::from_str::<Move>(r#"{"placements":[]}"#);
    assert!(result.is_err());
}

#[test]
fn test_deserialize_rejects_too_many_tiles() {
    let placements: Vec<Placement> = (0..=MAX_TILES as i32).map(|c| place('A', 0, c)).collect();
    let json = serde_json::json!({ "placements": placements }).to_string();
    assert!(serde_json::from_str::<Move>(&json).is_err());
}

#[test]
fn test_deserialize_sorts_placements() {
    let json = r#"{"placements":[
        {"tile":{"Letter":"O"},"position":{"row":7,"col":8}},
        {"tile":{"Letter":"T"},"position":{"row":7,"col":7}}
    ]}"#;
    let mov: Move = serde_json::from_str(json).unwrap();
    assert_eq!(mov.start(), Position::new(7, 7));
    assert_eq!(mov.end(), Position::new(7, 8));
    assert_eq!(mov.to_string(), "8H TO");
}
