//! Tests for loading scoring rules from TOML.

use std::io::Write;
use strictly_scrabble::{Board, Move, RulesConfig};
use tempfile::NamedTempFile;

#[test]
fn test_default_rules() {
    let rules = RulesConfig::default();
    assert_eq!(*rules.bingo_bonus(), 50);
    assert_eq!(*rules.bingo_tiles(), 7);
    assert_eq!(Board::new().rules(), &rules);
}

#[test]
fn test_from_toml_fills_missing_keys() {
    let rules = RulesConfig::from_toml("bingo_bonus = 40").unwrap();
    assert_eq!(*rules.bingo_bonus(), 40);
    assert_eq!(*rules.bingo_tiles(), 7);

    assert_eq!(RulesConfig::from_toml("").unwrap(), RulesConfig::default());
}

#[test]
fn test_from_toml_rejects_bad_bingo_tiles() {
    for content in ["bingo_tiles = 0", "bingo_tiles = 8"] {
        let err = RulesConfig::from_toml(content).unwrap_err();
        assert!(err.message.contains("bingo_tiles"), "{}", err);
    }
}

#[test]
fn test_from_toml_rejects_wrong_type() {
    let err = RulesConfig::from_toml("bingo_bonus = \"lots\"").unwrap_err();
    assert!(err.message.contains("Failed to parse rules"));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "bingo_bonus = 35").unwrap();
    writeln!(file, "bingo_tiles = 6").unwrap();

    let rules = RulesConfig::from_file(file.path()).unwrap();
    assert_eq!(rules, RulesConfig::new(35, 6));

    // Six tiles now earn the bonus
    let mut board = Board::with_rules(rules);
    let score = board.apply_move("8H ABANDO".parse::<Move>().unwrap()).unwrap();
    assert_eq!(score, 22 + 35);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RulesConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read rules file"));
    assert!(err.file.ends_with("rules_config.rs"));
}
