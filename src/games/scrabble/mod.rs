//! Scrabble rules engine.
//!
//! Board geometry, tiles, moves, placement validation, scoring and word
//! extraction for dictionary challenges.

mod action;
mod board;
pub mod contracts;
pub mod invariants;
pub mod notation;
mod position;
mod premium;
pub mod rules;
mod tile;
mod types;

pub use action::{MAX_TILES, Move, MoveError, Placement, PlacementError};
pub use board::{Board, BoardError};
pub use notation::{NotationError, format_position, parse_position};
pub use position::{BOARD_SIZE, Direction, Position};
pub use premium::{SquareType, layout_string};
pub use tile::{BLANK_SYMBOL, BlankLetter, Tile, TileError};
pub use types::{Grid, MoveRecord};
