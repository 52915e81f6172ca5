//! Premium squares.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Bonus carried by a board square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum SquareType {
    /// No bonus.
    #[strum(to_string = ".")]
    Plain,
    /// Doubles the letter placed on it.
    #[strum(to_string = "2")]
    LetterX2,
    /// Triples the letter placed on it.
    #[strum(to_string = "3")]
    LetterX3,
    /// Doubles the word through it.
    #[strum(to_string = "d")]
    WordX2,
    /// Triples the word through it.
    #[strum(to_string = "t")]
    WordX3,
}

use SquareType::{LetterX2 as L2, LetterX3 as L3, Plain as __, WordX2 as W2, WordX3 as W3};

/// Top-left quadrant of the standard layout, centre row and column included.
/// The other three quadrants are mirror images.
const TOP_LEFT_QUADRANT: [[SquareType; 8]; 8] = [
    [W3, __, __, L2, __, __, __, W3],
    [__, W2, __, __, __, L3, __, __],
    [__, __, W2, __, __, __, L2, __],
    [L2, __, __, W2, __, __, __, L2],
    [__, __, __, __, W2, __, __, __],
    [__, L3, __, __, __, L3, __, __],
    [__, __, L2, __, __, __, L2, __],
    [W3, __, __, L2, __, __, __, W2],
];

impl SquareType {
    /// Square type at a board position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is off the board.
    pub fn at(position: Position) -> Self {
        let quadrant = position.regularise();
        TOP_LEFT_QUADRANT[quadrant.row() as usize][quadrant.col() as usize]
    }

    /// Factor applied to a tile newly placed on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            SquareType::LetterX2 => 2,
            SquareType::LetterX3 => 3,
            SquareType::Plain | SquareType::WordX2 | SquareType::WordX3 => 1,
        }
    }

    /// Factor applied to a word when a tile is newly placed on this square.
    pub fn word_multiplier(self) -> u32 {
        match self {
            SquareType::WordX2 => 2,
            SquareType::WordX3 => 3,
            SquareType::Plain | SquareType::LetterX2 | SquareType::LetterX3 => 1,
        }
    }
}

/// Renders the full 15x15 premium layout, one row per line.
pub fn layout_string() -> String {
    let size = super::position::BOARD_SIZE;
    let mut result = String::new();
    for row in 0..size {
        for col in 0..size {
            result.push_str(&SquareType::at(Position::new(row, col)).to_string());
        }
        result.push('\n');
    }
    result
}
