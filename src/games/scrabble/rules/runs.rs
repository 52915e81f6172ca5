//! Extraction of contiguous tile runs and the words they spell.

use super::super::action::Move;
use super::super::position::{Direction, Position};
use super::super::tile::Tile;
use super::super::types::Grid;
use std::collections::BTreeSet;
use tracing::instrument;

/// Tiles of the run along `direction` that passes through `anchor`, in board
/// order. The run stops at the first empty square or the board edge on each
/// side.
///
/// # Panics
///
/// Panics if `anchor` is empty or off the board.
#[instrument(skip(grid))]
pub fn tiles_through(grid: &Grid, anchor: Position, direction: Direction) -> Vec<(Tile, Position)> {
    assert!(
        grid.is_occupied(anchor),
        "tiles_through() needs an occupied anchor, {anchor} is empty"
    );

    let step = direction.epsilon();
    let occupied = |pos: Position| pos.in_bounds() && grid.is_occupied(pos);

    let mut first = anchor;
    while occupied(first - step) {
        first -= step;
    }

    let mut run = Vec::new();
    let mut pos = first;
    while occupied(pos) {
        if let Some(tile) = grid.get(pos) {
            run.push((tile, pos));
        }
        pos += step;
    }
    run
}

/// True if `pos` has an occupied neighbour along `direction`, meaning a tile
/// there is part of a run of two or more along that axis.
pub fn forms_new_word(grid: &Grid, pos: Position, direction: Direction) -> bool {
    pos.adjacent(Some(direction)).any(|adj| grid.is_occupied(adj))
}

/// Uppercase spelling of the run through `anchor`, or `None` if it contains
/// an unresolved blank.
pub fn word_through(grid: &Grid, anchor: Position, direction: Direction) -> Option<String> {
    tiles_through(grid, anchor, direction)
        .into_iter()
        .map(|(tile, _)| tile.letter())
        .collect()
}

/// Distinct words created by a move already written to the grid: its main
/// word plus every cross word through one of its tiles.
///
/// Returns `None` if any of those words still holds an unresolved blank.
#[instrument(skip(grid))]
pub fn words_formed(grid: &Grid, mov: &Move) -> Option<BTreeSet<String>> {
    let direction = mov.direction();
    let cross = direction.opposite();

    let mut words = BTreeSet::new();
    words.insert(word_through(grid, mov.start(), direction)?);
    for pos in mov.positions().filter(|p| forms_new_word(grid, *p, cross)) {
        words.insert(word_through(grid, pos, cross)?);
    }
    Some(words)
}
