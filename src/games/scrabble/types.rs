//! Core storage types: the tile grid and the move log.

use super::action::Move;
use super::position::{BOARD_SIZE, Position};
use super::tile::Tile;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const SIZE: usize = BOARD_SIZE as usize;

/// 15x15 grid of optional tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    squares: [[Option<Tile>; SIZE]; SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// Tile at `pos`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        let (row, col) = pos.index();
        self.squares[row][col]
    }

    /// True if a tile sits at `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Puts a tile on an empty square.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied or off the board.
    pub(crate) fn place(&mut self, pos: Position, tile: Tile) {
        let (row, col) = pos.index();
        let slot = &mut self.squares[row][col];
        assert!(slot.is_none(), "Tried to place {tile} on non-empty square {pos}");
        *slot = Some(tile);
    }

    /// Overwrites the tile on an occupied square.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty or off the board.
    pub(crate) fn replace(&mut self, pos: Position, tile: Tile) {
        let (row, col) = pos.index();
        let slot = &mut self.squares[row][col];
        assert!(slot.is_some(), "Tried to replace tile on empty square {pos}");
        *slot = Some(tile);
    }

    /// Takes the tile off an occupied square.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty or off the board.
    pub(crate) fn remove(&mut self, pos: Position) -> Tile {
        let (row, col) = pos.index();
        self.squares[row][col]
            .take()
            .unwrap_or_else(|| panic!("Tried to remove tile from empty square {pos}"))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>; SIZE]> {
        self.squares.iter()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().filter(|s| s.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// An accepted move and the score it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveRecord {
    /// The move as accepted (blanks may be resolved later).
    action: Move,
    /// Points scored.
    #[getter(skip)]
    score: u32,
}

impl MoveRecord {
    /// Points scored.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn action_mut(&mut self) -> &mut Move {
        &mut self.action
    }

    pub(crate) fn into_action(self) -> Move {
        self.action
    }
}
