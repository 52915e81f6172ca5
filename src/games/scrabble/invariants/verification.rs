//! Formal verification of position geometry using the Kani model checker.
//!
//! These proof harnesses check the quadrant and adjacency properties the
//! premium lookup and anchor check rely on, for every on-board position.

#[cfg(kani)]
mod proofs {
    use crate::{Direction, Position};

    fn any_on_board() -> Position {
        let row: i32 = kani::any();
        let col: i32 = kani::any();
        kani::assume((0..15).contains(&row) && (0..15).contains(&col));
        Position::new(row, col)
    }

    /// Proves: regularise lands in the top-left quadrant and is idempotent.
    #[kani::proof]
    fn verify_regularise_in_quadrant() {
        let pos = any_on_board();
        let reg = pos.regularise();

        assert!((0..8).contains(&reg.row()) && (0..8).contains(&reg.col()));
        assert!(reg.regularise() == reg);
    }

    /// Proves: neighbours along an axis are on the board and one step away.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_adjacent_one_step() {
        let pos = any_on_board();
        let direction = if kani::any() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };

        for adj in pos.adjacent(Some(direction)) {
            assert!(adj.in_bounds());
            let diff = adj - pos;
            assert!(diff.row().abs() + diff.col().abs() == 1);
        }
    }
}
