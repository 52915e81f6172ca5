//! Woogles-style move notation.
//!
//! A position token names a square and an axis at once: the row number
//! first (`8H`) means a horizontal word, the column letter first (`H8`) a
//! vertical one. Rows run 1 to 15 from the top, columns A to O from the
//! left. A move is a position token, a space, and one symbol per square
//! along the axis: an uppercase letter, a lowercase letter for a blank
//! standing in for it, `?` for a blank with no letter yet, or `.` for a
//! square already holding a tile.

use super::action::{Move, MoveError, Placement};
use super::position::{Direction, Position};
use super::tile::{Tile, TileError};
use std::str::FromStr;
use tracing::instrument;

/// Symbol for a square the move plays through.
const PLAY_THROUGH: char = '.';

/// Parses a position token into the square and the axis it implies.
///
/// # Errors
///
/// [`NotationError::Malformed`] unless the whole token is a row number
/// without leading zeros and a column letter in either order,
/// [`NotationError::OutOfBounds`] if the square is off the board.
#[instrument]
pub fn parse_position(token: &str) -> Result<(Position, Direction), NotationError> {
    let malformed = || NotationError::Malformed(token.to_string());

    let first = token.chars().next().ok_or_else(malformed)?;
    let (row_digits, col_letter, direction) = if first.is_ascii_digit() {
        let split = token.find(|c: char| !c.is_ascii_digit()).ok_or_else(malformed)?;
        let (digits, rest) = token.split_at(split);
        (digits, rest, Direction::Horizontal)
    } else {
        let (letter, digits) = token.split_at(first.len_utf8());
        (digits, letter, Direction::Vertical)
    };

    let mut letters = col_letter.chars();
    let col = match (letters.next(), letters.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => c as i32 - 'A' as i32,
        _ => return Err(malformed()),
    };
    if row_digits.is_empty()
        || row_digits.starts_with('0')
        || !row_digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(malformed());
    }
    let row = row_digits
        .parse::<i32>()
        .map_err(|_| NotationError::Malformed(token.to_string()))?
        - 1;

    let pos = Position::new(row, col);
    if !pos.in_bounds() {
        return Err(NotationError::OutOfBounds { row, col });
    }
    Ok((pos, direction))
}

/// Renders a square as a position token for the given axis.
///
/// # Panics
///
/// Panics if `pos` is off the board.
pub fn format_position(pos: Position, direction: Direction) -> String {
    assert!(pos.in_bounds(), "cannot format off-board position {pos:?}");

    let row = pos.row() + 1;
    let col = char::from(b'A' + pos.col() as u8);
    match direction {
        Direction::Horizontal => format!("{row}{col}"),
        Direction::Vertical => format!("{col}{row}"),
    }
}

impl FromStr for Move {
    type Err = NotationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(position), Some(symbols), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(NotationError::Malformed(s.to_string()));
        };

        let (start, direction) = parse_position(position)?;
        let mut placements = Vec::new();
        let mut pos = start;
        for symbol in symbols.chars() {
            if symbol != PLAY_THROUGH {
                if !pos.in_bounds() {
                    return Err(NotationError::OutOfBounds {
                        row: pos.row(),
                        col: pos.col(),
                    });
                }
                placements.push(Placement::new(Tile::from_notation(symbol)?, pos));
            }
            pos += direction.epsilon();
        }

        Ok(Move::new(placements)?)
    }
}

/// Canonical notation: starts at the first placed tile, with `.` for every
/// square skipped between placed tiles.
///
/// A move whose tiles are not in one line has no notation and is shown as
/// its placements instead.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let on_board = self.positions().all(|p| p.in_bounds());
        if !self.is_valid() || !on_board {
            let parts: Vec<String> = self
                .iter()
                .map(|p| format!("{}@{}", p.tile, p.position))
                .collect();
            return write!(f, "[{}]", parts.join(", "));
        }

        let direction = self.direction();
        write!(f, "{} ", format_position(self.start(), direction))?;

        let mut previous: Option<Position> = None;
        for placement in self {
            if let Some(prev) = previous {
                let skipped = (placement.position - prev).l1_norm() - 1;
                for _ in 0..skipped {
                    write!(f, "{PLAY_THROUGH}")?;
                }
            }
            write!(f, "{}", placement.tile)?;
            previous = Some(placement.position);
        }
        Ok(())
    }
}

/// Error from reading move notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// The text does not have the expected shape.
    #[display("Malformed notation {:?}", _0)]
    Malformed(String),

    /// A square named or reached by the notation is off the board.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Zero-based row.
        row: i32,
        /// Zero-based column.
        col: i32,
    },

    /// A symbol is not a valid tile.
    #[display("{}", _0)]
    Tile(TileError),

    /// The tiles do not make a move.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for NotationError {}

impl From<TileError> for NotationError {
    fn from(err: TileError) -> Self {
        NotationError::Tile(err)
    }
}

impl From<MoveError> for NotationError {
    fn from(err: MoveError) -> Self {
        NotationError::Move(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_first_is_horizontal() {
        assert_eq!(
            parse_position("6G"),
            Ok((Position::new(5, 6), Direction::Horizontal))
        );
    }

    #[test]
    fn test_column_first_is_vertical() {
        assert_eq!(
            parse_position("G6"),
            Ok((Position::new(5, 6), Direction::Vertical))
        );
    }

    #[test]
    fn test_two_digit_rows() {
        assert_eq!(
            parse_position("15O"),
            Ok((Position::new(14, 14), Direction::Horizontal))
        );
        assert_eq!(
            parse_position("A10"),
            Ok((Position::new(9, 0), Direction::Vertical))
        );
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        assert!(matches!(parse_position("8H!"), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_position("H8x"), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_position(""), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_position("8h"), Err(NotationError::Malformed(_))));
    }

    #[test]
    fn test_row_past_fifteen_is_off_board() {
        assert_eq!(
            parse_position("16A"),
            Err(NotationError::OutOfBounds { row: 15, col: 0 })
        );
    }

    #[test]
    fn test_leading_zero_rows_are_malformed() {
        for token in ["0A", "A0", "08H", "H08", "008A"] {
            assert_eq!(
                parse_position(token),
                Err(NotationError::Malformed(token.to_string())),
                "{token}"
            );
        }
    }

    #[test]
    fn test_format_position_both_axes() {
        let pos = Position::new(9, 4);
        assert_eq!(format_position(pos, Direction::Horizontal), "10E");
        assert_eq!(format_position(pos, Direction::Vertical), "E10");
    }

    #[test]
    fn test_parse_skips_play_through() {
        let mov: Move = "10H .AFFE".parse().unwrap();
        assert_eq!(mov.len(), 4);
        assert_eq!(mov.start(), Position::new(9, 8));
    }

    #[test]
    fn test_move_running_off_board() {
        assert_eq!(
            "8M ABCD".parse::<Move>(),
            Err(NotationError::OutOfBounds { row: 7, col: 15 })
        );
    }

    #[test]
    fn test_only_play_through_is_empty() {
        assert_eq!(
            "8H ...".parse::<Move>(),
            Err(NotationError::Move(MoveError::Empty))
        );
    }

    #[test]
    fn test_display_keeps_inner_skips_only() {
        let mov: Move = "F8 .NSI?T".parse().unwrap();
        assert_eq!(mov.to_string(), "F9 NSI?T");

        let mov: Move = "10I AFF.E".parse().unwrap();
        assert_eq!(mov.to_string(), "10I AFF.E");
    }
}
