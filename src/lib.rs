//! Strictly Scrabble - a type-safe rules engine for Scrabble-like word games
//!
//! This library validates and scores tile placements on a standard 15x15
//! board. Dictionary lookup, racks and turn order are left to the caller.
//!
//! # Architecture
//!
//! - **Geometry**: [`Position`], [`Direction`] and the premium-square layout
//! - **Moves**: [`Move`] is a candidate placement, built directly or parsed
//!   from notation such as `"8H ABANDON"`
//! - **Board**: [`Board`] checks anchoring and continuity, places tiles,
//!   scores them and keeps the move history
//! - **Contracts**: preconditions and board invariants in [`contracts`] and
//!   [`invariants`]
//!
//! # Example
//!
//! ```
//! use strictly_scrabble::{Board, Move};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut board = Board::new();
//! let score = board.apply_move("8H ABANDON".parse::<Move>()?)?;
//! assert_eq!(score, 74);
//!
//! let words = board.challenge_words()?;
//! assert!(words.contains("ABANDON"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod rules_config;

// Crate-level exports - Configuration
pub use rules_config::{ConfigError, RulesConfig};

// Crate-level exports - Game types
pub use games::scrabble::{
    BLANK_SYMBOL, BOARD_SIZE, BlankLetter, Board, BoardError, Direction, Grid, MAX_TILES, Move,
    MoveError, MoveRecord, Placement, PlacementError, Position, SquareType, Tile, TileError,
    layout_string,
};

// Crate-level exports - Notation
pub use games::scrabble::{NotationError, format_position, parse_position};

// Crate-level exports - Rule modules
pub use games::scrabble::{contracts, invariants, notation, rules};
