//! Move size: every recorded move placed between one and seven tiles.

use super::super::{Board, MAX_TILES};
use super::Invariant;

/// Invariant: every move in the history places `1..=MAX_TILES` tiles.
pub struct MoveSizeInvariant;

impl Invariant<Board> for MoveSizeInvariant {
    fn holds(board: &Board) -> bool {
        board.moves().all(|m| (1..=MAX_TILES).contains(&m.len()))
    }

    fn description() -> &'static str {
        "Every accepted move places one to seven tiles"
    }
}
