//! First-class move types for word placement.
//!
//! A move is a candidate placement of tiles. It can be built and inspected
//! independently of any board; whether it fits the board is decided when it
//! is handed to [`Board::apply_move`](super::Board::apply_move).

use super::position::{Direction, Position};
use super::tile::{Tile, TileError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Most tiles a single move may place (a full rack).
pub const MAX_TILES: usize = 7;

/// One tile and the square it is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// The tile being placed.
    pub tile: Tile,
    /// Where it goes.
    pub position: Position,
}

/// A placement attempt: one to seven tiles, kept sorted by position.
///
/// Construction only checks the tile count. Line and uniqueness checks are
/// reported by [`Move::is_valid`] so that an ill-formed move can still be
/// handed to a board and rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveShape")]
pub struct Move {
    placements: Vec<Placement>,
}

/// Serialized form of a [`Move`], checked by [`Move::new`] on the way in.
#[derive(Deserialize)]
struct MoveShape {
    placements: Vec<Placement>,
}

impl TryFrom<MoveShape> for Move {
    type Error = MoveError;

    fn try_from(shape: MoveShape) -> Result<Self, Self::Error> {
        Move::new(shape.placements)
    }
}

impl Move {
    /// Creates a move from placements in any order.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Empty`] or [`MoveError::TooManyTiles`] when the
    /// count is outside `1..=7`.
    #[instrument(skip(placements))]
    pub fn new(placements: impl IntoIterator<Item = Placement>) -> Result<Self, MoveError> {
        let mut placements: Vec<Placement> = placements.into_iter().collect();
        if placements.is_empty() {
            return Err(MoveError::Empty);
        }
        if placements.len() > MAX_TILES {
            return Err(MoveError::TooManyTiles(placements.len()));
        }
        placements.sort_by_key(|p| p.position);
        Ok(Self { placements })
    }

    /// All tiles share a row or all share a column, and no square repeats.
    pub fn is_valid(&self) -> bool {
        let first = self.start();
        let along_row = self.positions().all(|p| p.row() == first.row());
        let along_col = self.positions().all(|p| p.col() == first.col());
        (along_row || along_col) && self.first_duplicate().is_none()
    }

    /// First square that appears twice in the move, if any.
    pub fn first_duplicate(&self) -> Option<Position> {
        let mut seen = HashSet::with_capacity(self.placements.len());
        self.positions().find(|p| !seen.insert(*p))
    }

    /// First placed square.
    pub fn start(&self) -> Position {
        self.placements[0].position
    }

    /// Last placed square.
    pub fn end(&self) -> Position {
        self.placements[self.placements.len() - 1].position
    }

    /// Axis of the move. A single tile counts as horizontal.
    ///
    /// # Panics
    ///
    /// Panics if the move is not [valid](Move::is_valid).
    pub fn direction(&self) -> Direction {
        assert!(self.is_valid(), "direction() called on invalid move {self:?}");

        let diff = self.end() - self.start();
        if diff.row() == 0 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    /// Number of tiles placed.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Always false; a move holds at least one tile.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// True if `position` is one of the squares this move places on.
    pub fn covers(&self, position: Position) -> bool {
        self.placements
            .binary_search_by_key(&position, |p| p.position)
            .is_ok()
    }

    /// Placed squares in board order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.placements.iter().map(|p| p.position)
    }

    /// Placements in board order.
    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// Blanks in this move still waiting for a letter.
    pub fn unset_blanks(&self) -> usize {
        self.placements.iter().filter(|p| !p.tile.is_set()).count()
    }

    /// Resolves every unset blank, in board order, with one letter each.
    ///
    /// The whole batch is checked before any blank is touched, so on error
    /// the move is unchanged.
    ///
    /// # Errors
    ///
    /// [`MoveError::BlankCountMismatch`] if `letters` does not hold exactly
    /// one letter per unset blank, [`MoveError::Tile`] if any of them is not
    /// alphabetic.
    #[instrument(skip(self), fields(unset = self.unset_blanks()))]
    pub fn set_blanks(&mut self, letters: &str) -> Result<(), MoveError> {
        let letters: Vec<char> = letters.chars().collect();
        let expected = self.unset_blanks();
        if letters.len() != expected {
            return Err(MoveError::BlankCountMismatch {
                expected,
                got: letters.len(),
            });
        }
        if let Some(bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(MoveError::Tile(TileError::InvalidBlankLetter(*bad)));
        }

        let unset = self.placements.iter_mut().filter(|p| !p.tile.is_set());
        for (placement, letter) in unset.zip(letters) {
            placement.tile.set_letter(letter)?;
        }
        debug!(resolved = expected, "Blanks resolved");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Move {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Error from building a move or resolving its blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A move must place at least one tile.
    #[display("A move must place at least one tile")]
    Empty,

    /// More tiles than fit on a rack.
    #[display("A move places at most 7 tiles, got {}", _0)]
    TooManyTiles(usize),

    /// Wrong number of letters for the unset blanks.
    #[display("Expected {expected} blank letters, got {got}")]
    BlankCountMismatch {
        /// Unset blanks in the move.
        expected: usize,
        /// Letters supplied.
        got: usize,
    },

    /// A tile rejected its letter.
    #[display("{}", _0)]
    Tile(TileError),
}

impl std::error::Error for MoveError {}

impl From<TileError> for MoveError {
    fn from(err: TileError) -> Self {
        MoveError::Tile(err)
    }
}

/// Why a board refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// Tiles do not share a row or a column.
    #[display("Tiles are not in a single row or column")]
    NotInLine,

    /// Two tiles target the same square.
    #[display("Square {} is used twice", _0)]
    DuplicatePosition(Position),

    /// A tile lies off the board.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(Position),

    /// A tile targets a square that already holds one.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// No tile touches an existing tile or the centre square.
    #[display("Move does not touch an existing tile or the centre square")]
    Unanchored,

    /// The span of the move has an empty square in it.
    #[display("Move leaves a gap at {}", _0)]
    Gap(Position),
}

impl std::error::Error for PlacementError {}
