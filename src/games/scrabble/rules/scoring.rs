//! Move scoring.
//!
//! Premium squares only count for tiles placed by the move being scored.
//! A premium square is applied once in every run it belongs to, and word
//! multipliers in the same run multiply together.

use super::super::action::Move;
use super::super::position::{Direction, Position};
use super::super::premium::SquareType;
use super::super::types::Grid;
use super::runs::{forms_new_word, tiles_through};
use crate::RulesConfig;
use tracing::{instrument, trace};

/// Score of the run along `direction` through `anchor`.
///
/// `placed` is the move being scored; only its squares trigger their premium.
#[instrument(skip(grid, placed))]
pub fn score_run(grid: &Grid, anchor: Position, direction: Direction, placed: &Move) -> u32 {
    let mut letters = 0;
    let mut word_multiplier = 1;
    for (tile, pos) in tiles_through(grid, anchor, direction) {
        let mut letter_multiplier = 1;
        if placed.covers(pos) {
            let square = SquareType::at(pos);
            letter_multiplier = square.letter_multiplier();
            word_multiplier *= square.word_multiplier();
        }
        letters += tile.value() * letter_multiplier;
    }
    trace!(letters, word_multiplier, "Run scored");
    letters * word_multiplier
}

/// Total score of a move already written to the grid: its main run, every
/// new cross run, and the bingo bonus.
///
/// # Panics
///
/// Panics if any tile of the move is missing from the grid.
#[instrument(skip(grid, rules))]
pub fn score_move(grid: &Grid, mov: &Move, rules: &RulesConfig) -> u32 {
    assert!(
        mov.iter().all(|p| grid.get(p.position) == Some(p.tile)),
        "score_move() called before the move was placed"
    );

    let direction = mov.direction();
    let cross = direction.opposite();

    let main = score_run(grid, mov.start(), direction, mov);
    let cross_total: u32 = mov
        .positions()
        .filter(|pos| forms_new_word(grid, *pos, cross))
        .map(|pos| score_run(grid, pos, cross, mov))
        .sum();
    let bingo = if mov.len() >= *rules.bingo_tiles() {
        *rules.bingo_bonus()
    } else {
        0
    };

    main + cross_total + bingo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::scrabble::{Placement, Tile};

    fn placed(grid: &mut Grid, tiles: &[(char, i32, i32)]) -> Move {
        let mov = Move::new(tiles.iter().map(|&(c, row, col)| {
            Placement::new(Tile::new(c).unwrap(), Position::new(row, col))
        }))
        .unwrap();
        for p in &mov {
            grid.place(p.position, p.tile);
        }
        mov
    }

    #[test]
    fn test_two_double_word_squares_quadruple() {
        // Row 3 has double-word squares at columns 3 and 11.
        let mut grid = Grid::new();
        for col in 5..=9 {
            grid.place(Position::new(3, col), Tile::new('A').unwrap());
        }
        let mov = placed(&mut grid, &[('A', 3, 3), ('A', 3, 4), ('A', 3, 10), ('A', 3, 11)]);
        assert_eq!(score_run(&grid, mov.start(), Direction::Horizontal, &mov), 9 * 4);
    }

    #[test]
    fn test_word_multiplier_applies_to_whole_run() {
        let mut grid = Grid::new();
        let mov = placed(&mut grid, &[('B', 1, 1), ('E', 2, 1)]);
        assert_eq!(score_run(&grid, mov.start(), Direction::Vertical, &mov), (3 + 1) * 2);

        let mut grid = Grid::new();
        let single = placed(&mut grid, &[('B', 4, 4)]);
        assert_eq!(score_run(&grid, single.start(), Direction::Vertical, &single), 3 * 2);
    }

    #[test]
    fn test_existing_tile_premium_not_reused() {
        let mut grid = Grid::new();
        grid.place(Position::new(7, 3), Tile::new('Q').unwrap());
        let mov = placed(&mut grid, &[('I', 7, 4)]);
        // (7,3) is double-letter but Q was already there.
        assert_eq!(score_run(&grid, mov.start(), Direction::Horizontal, &mov), 11);
    }

    #[test]
    fn test_bingo_bonus_from_rules() {
        let mut grid = Grid::new();
        let mov = placed(
            &mut grid,
            &[
                ('A', 7, 7),
                ('B', 7, 8),
                ('A', 7, 9),
                ('N', 7, 10),
                ('D', 7, 11),
                ('O', 7, 12),
                ('N', 7, 13),
            ],
        );
        assert_eq!(score_move(&grid, &mov, &RulesConfig::default()), 74);
        assert_eq!(score_move(&grid, &mov, &RulesConfig::new(0, 7)), 24);
    }
}
