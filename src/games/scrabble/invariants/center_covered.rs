//! Centre coverage: once anything is played, the centre square is taken.

use super::super::{Board, Position};
use super::Invariant;

/// Invariant: a board with history has a tile on the centre square.
pub struct CenterCoveredInvariant;

impl Invariant<Board> for CenterCoveredInvariant {
    fn holds(board: &Board) -> bool {
        board.is_empty() || board.tile_at(Position::CENTER).is_some()
    }

    fn description() -> &'static str {
        "Centre square is covered once a move has been played"
    }
}
