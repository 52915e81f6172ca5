//! Grid/history consistency: a square is occupied iff an accepted move
//! placed a tile there.

use super::super::{Board, Grid};
use super::Invariant;

/// Invariant: replaying the history onto an empty grid reproduces the grid.
///
/// No two moves claim the same square, no tile is on the board without a
/// move that placed it, and every recorded tile is still on the board.
pub struct GridMatchesHistoryInvariant;

impl Invariant<Board> for GridMatchesHistoryInvariant {
    fn holds(board: &Board) -> bool {
        let mut reconstructed = Grid::new();

        for action in board.moves() {
            for placement in action {
                // Square must be empty before placing
                if reconstructed.is_occupied(placement.position) {
                    return false;
                }
                reconstructed.place(placement.position, placement.tile);
            }
        }

        reconstructed == *board.grid()
    }

    fn description() -> &'static str {
        "Grid holds exactly the tiles placed by accepted moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::scrabble::{Move, Position, Tile};

    #[test]
    fn test_empty_board_holds() {
        assert!(GridMatchesHistoryInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut board = Board::new();
        for notation in ["8E HORN", "G6 FA.M", "10E PASTE", "9G .OB"] {
            board.apply_move(notation.parse::<Move>().unwrap()).unwrap();
        }
        assert!(GridMatchesHistoryInvariant::holds(&board));
        assert_eq!(board.grid().occupied_count(), 4 + 3 + 5 + 2);
    }

    #[test]
    fn test_undo_holds() {
        let mut board = Board::new();
        board.apply_move("8G TO".parse::<Move>().unwrap()).unwrap();
        board.apply_move("G5 TIL.".parse::<Move>().unwrap()).unwrap();
        board.undo_move(-1).unwrap();
        assert!(GridMatchesHistoryInvariant::holds(&board));
    }

    #[test]
    fn test_stray_tile_violates() {
        let mut board = Board::new();
        board.apply_move("8G TO".parse::<Move>().unwrap()).unwrap();
        board.grid.place(Position::new(3, 3), Tile::new('X').unwrap());
        assert!(!GridMatchesHistoryInvariant::holds(&board));
    }

    #[test]
    fn test_missing_tile_violates() {
        let mut board = Board::new();
        board.apply_move("8G TO".parse::<Move>().unwrap()).unwrap();
        board.grid.remove(Position::CENTER);
        assert!(!GridMatchesHistoryInvariant::holds(&board));
    }
}
