//! Board coordinates and the two axes of play.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i32 = 15;

/// Last index of the top-left quadrant, which is also the central row/column.
const QUADRANT_EDGE: i32 = 7;

/// Axis along which the tiles of a move lie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Along a row (left to right).
    Horizontal,
    /// Along a column (top to bottom).
    Vertical,
}

impl Direction {
    /// Returns the other axis.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Minimum displacement along the axis.
    pub fn epsilon(self) -> Position {
        match self {
            Direction::Horizontal => Position::new(0, 1),
            Direction::Vertical => Position::new(1, 0),
        }
    }
}

/// A square on the board, addressed by zero-based row and column.
///
/// Positions are plain values: arithmetic may step off the board, so callers
/// check [`Position::in_bounds`] before using a derived position as an index.
/// Ordering is lexicographic on `(row, col)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// The centre square, which the opening move must cover.
    pub const CENTER: Position = Position::new(QUADRANT_EDGE, QUADRANT_EDGE);

    /// Creates a position. No bounds check is performed.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Zero-based row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// True when both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        in_range(self.row) && in_range(self.col)
    }

    /// Sum of the coordinates.
    pub fn l1_norm(&self) -> i32 {
        self.row + self.col
    }

    /// Yields the on-board neighbours one step away along `direction`, or
    /// along both axes when no direction is given.
    ///
    /// # Panics
    ///
    /// Panics if `self` is off the board.
    #[instrument]
    pub fn adjacent(self, direction: Option<Direction>) -> impl Iterator<Item = Position> {
        assert!(self.in_bounds(), "adjacent() called on off-board {self:?}");

        let axes: &'static [Direction] = match direction {
            None => &[Direction::Vertical, Direction::Horizontal],
            Some(Direction::Vertical) => &[Direction::Vertical],
            Some(Direction::Horizontal) => &[Direction::Horizontal],
        };

        axes.iter()
            .flat_map(move |axis| [self - axis.epsilon(), self + axis.epsilon()])
            .filter(Position::in_bounds)
    }

    /// Maps the position onto its mirror image in the top-left quadrant.
    ///
    /// The board is symmetric about its central row and central column, so
    /// any coordinate past the centre is reflected back through it.
    ///
    /// # Panics
    ///
    /// Panics if `self` is off the board.
    pub fn regularise(self) -> Position {
        assert!(self.in_bounds(), "regularise() called on off-board {self:?}");

        let reflect = |x: i32| if x > QUADRANT_EDGE { BOARD_SIZE - 1 - x } else { x };
        Position::new(reflect(self.row), reflect(self.col))
    }

    /// Row-major grid indices.
    ///
    /// # Panics
    ///
    /// Panics if `self` is off the board.
    pub(crate) fn index(self) -> (usize, usize) {
        assert!(self.in_bounds(), "off-board grid access at {self:?}");
        (self.row as usize, self.col as usize)
    }
}

fn in_range(x: i32) -> bool {
    (0..BOARD_SIZE).contains(&x)
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        *self = *self + rhs;
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Position) {
        *self = *self - rhs;
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.in_bounds() {
            write!(f, "{}", super::notation::format_position(*self, Direction::Horizontal))
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
