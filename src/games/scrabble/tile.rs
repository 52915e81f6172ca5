//! Letter tiles and blanks.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Symbol used for a blank tile.
pub const BLANK_SYMBOL: char = '?';

/// Resolution state of a blank tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlankLetter {
    /// No letter chosen yet.
    Unresolved,
    /// Stands in for the given uppercase letter.
    Resolved(char),
}

/// A single tile placed on the board.
///
/// Equality follows the letter a tile shows: two lettered tiles are equal when
/// their letters match, two blanks are equal when they stand for the same
/// letter (or are both unresolved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileShape")]
pub enum Tile {
    /// A regular tile bearing an uppercase letter.
    Letter(char),
    /// A zero-point blank.
    Blank(BlankLetter),
}

/// Serialized form of a [`Tile`]; letters are checked on the way in.
#[derive(Deserialize)]
enum TileShape {
    Letter(char),
    Blank(BlankLetter),
}

impl TryFrom<TileShape> for Tile {
    type Error = TileError;

    fn try_from(shape: TileShape) -> Result<Self, Self::Error> {
        match shape {
            TileShape::Letter(letter) if letter.is_ascii_uppercase() => Ok(Tile::Letter(letter)),
            TileShape::Letter(letter) => Err(TileError::InvalidLetter(letter)),
            TileShape::Blank(BlankLetter::Unresolved) => Ok(Tile::blank()),
            TileShape::Blank(BlankLetter::Resolved(letter)) if letter.is_ascii_uppercase() => {
                Ok(Tile::Blank(BlankLetter::Resolved(letter)))
            }
            TileShape::Blank(BlankLetter::Resolved(letter)) => {
                Err(TileError::InvalidBlankLetter(letter))
            }
        }
    }
}

impl Tile {
    /// Creates a tile from a letter (case-insensitive) or [`BLANK_SYMBOL`].
    #[instrument]
    pub fn new(letter: char) -> Result<Self, TileError> {
        if letter == BLANK_SYMBOL {
            return Ok(Tile::blank());
        }
        if !letter.is_ascii_alphabetic() {
            return Err(TileError::InvalidLetter(letter));
        }
        Ok(Tile::Letter(letter.to_ascii_uppercase()))
    }

    /// Creates an unresolved blank.
    pub fn blank() -> Self {
        Tile::Blank(BlankLetter::Unresolved)
    }

    /// Point value of the tile.
    pub fn value(&self) -> u32 {
        match self {
            Tile::Blank(_) => 0,
            Tile::Letter(letter) => letter_value(*letter),
        }
    }

    /// True for blanks, resolved or not.
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank(_))
    }

    /// True unless the tile is a blank still waiting for its letter.
    pub fn is_set(&self) -> bool {
        !matches!(self, Tile::Blank(BlankLetter::Unresolved))
    }

    /// The uppercase letter the tile shows, if known.
    pub fn letter(&self) -> Option<char> {
        match self {
            Tile::Letter(letter) | Tile::Blank(BlankLetter::Resolved(letter)) => Some(*letter),
            Tile::Blank(BlankLetter::Unresolved) => None,
        }
    }

    /// Chooses the letter an unresolved blank stands for.
    ///
    /// # Errors
    ///
    /// Fails if the tile is not a blank, was already resolved, or `letter` is
    /// not alphabetic. The tile is unchanged on failure.
    #[instrument]
    pub fn set_letter(&mut self, letter: char) -> Result<(), TileError> {
        match self {
            Tile::Letter(_) => Err(TileError::NotBlank),
            Tile::Blank(BlankLetter::Resolved(current)) => Err(TileError::AlreadyResolved(*current)),
            Tile::Blank(slot @ BlankLetter::Unresolved) => {
                if !letter.is_ascii_alphabetic() {
                    return Err(TileError::InvalidBlankLetter(letter));
                }
                *slot = BlankLetter::Resolved(letter.to_ascii_uppercase());
                debug!(letter = %letter.to_ascii_uppercase(), "Blank resolved");
                Ok(())
            }
        }
    }

    /// Parses a tile from move notation: uppercase for a letter, lowercase for
    /// a resolved blank, [`BLANK_SYMBOL`] for an unresolved blank.
    #[instrument]
    pub fn from_notation(symbol: char) -> Result<Self, TileError> {
        if symbol == BLANK_SYMBOL || symbol.is_ascii_uppercase() {
            Tile::new(symbol)
        } else if symbol.is_ascii_lowercase() {
            let mut tile = Tile::blank();
            tile.set_letter(symbol)?;
            Ok(tile)
        } else {
            Err(TileError::InvalidLetter(symbol))
        }
    }

    /// Renders the tile in move notation.
    pub fn notation(&self) -> char {
        match self {
            Tile::Letter(letter) => *letter,
            Tile::Blank(BlankLetter::Resolved(letter)) => letter.to_ascii_lowercase(),
            Tile::Blank(BlankLetter::Unresolved) => BLANK_SYMBOL,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// Standard English letter values.
fn letter_value(letter: char) -> u32 {
    match letter {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => unreachable!("tiles only hold uppercase ASCII letters, got {letter:?}"),
    }
}

/// Error from building or resolving a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TileError {
    /// Not a letter or the blank symbol.
    #[display("Invalid tile letter {:?}", _0)]
    InvalidLetter(char),

    /// Only blanks can be assigned a letter.
    #[display("Cannot set a letter for a non-blank tile")]
    NotBlank,

    /// The blank already stands for a letter.
    #[display("Letter for blank tile already set to {}", _0)]
    AlreadyResolved(char),

    /// A blank can only stand for a letter.
    #[display("Invalid blank tile letter {:?}", _0)]
    InvalidBlankLetter(char),
}

impl std::error::Error for TileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_standard_distribution() {
        let word_value: u32 = "QUIZ"
            .chars()
            .map(|c| Tile::new(c).unwrap().value())
            .sum();
        assert_eq!(word_value, 10 + 1 + 1 + 10);
    }

    #[test]
    fn test_every_letter_has_a_value() {
        for letter in 'A'..='Z' {
            assert!(Tile::new(letter).unwrap().value() > 0);
        }
    }

    #[test]
    fn test_set_letter_failure_leaves_blank_unresolved() {
        let mut tile = Tile::blank();
        assert_eq!(tile.set_letter('3'), Err(TileError::InvalidBlankLetter('3')));
        assert!(!tile.is_set());
    }
}
