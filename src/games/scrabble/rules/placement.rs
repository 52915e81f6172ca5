//! Geometric checks a move must pass before it touches the grid.

use super::super::action::{Move, PlacementError};
use super::super::position::Position;
use super::super::types::Grid;
use tracing::instrument;

/// First structural defect of a move, checked without looking at the grid:
/// every square on the board, no square twice, all in one row or column.
#[instrument]
pub fn structural_error(mov: &Move) -> Option<PlacementError> {
    if let Some(pos) = mov.positions().find(|p| !p.in_bounds()) {
        return Some(PlacementError::OutOfBounds(pos));
    }
    if let Some(pos) = mov.first_duplicate() {
        return Some(PlacementError::DuplicatePosition(pos));
    }
    if !mov.is_valid() {
        return Some(PlacementError::NotInLine);
    }
    None
}

/// First square of the move that already holds a tile.
pub fn first_occupied(grid: &Grid, mov: &Move) -> Option<Position> {
    mov.positions().find(|pos| grid.is_occupied(*pos))
}

/// True if some tile of the move covers the centre square or sits next to
/// an occupied square.
///
/// On an empty board only the centre can satisfy this, which is what forces
/// the opening move through the centre.
#[instrument(skip(grid))]
pub fn has_anchor(grid: &Grid, mov: &Move) -> bool {
    mov.positions().any(|pos| {
        pos == Position::CENTER || pos.adjacent(None).any(|adj| grid.is_occupied(adj))
    })
}

/// First empty square between the move's first and last tile that the move
/// does not fill itself.
///
/// Existing tiles inside the span are fine; that is how a move plays
/// through letters already on the board.
///
/// # Panics
///
/// Panics if the move is not structurally valid.
#[instrument(skip(grid))]
pub fn first_gap(grid: &Grid, mov: &Move) -> Option<Position> {
    let step = mov.direction().epsilon();
    let mut curr = mov.start();
    while curr != mov.end() {
        if !curr.in_bounds() {
            return Some(curr);
        }
        if !mov.covers(curr) && !grid.is_occupied(curr) {
            return Some(curr);
        }
        curr += step;
    }
    None
}
