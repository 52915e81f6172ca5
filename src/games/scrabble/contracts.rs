//! Contract-based validation for word placement.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, PlacementError};
use super::board::Board;
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::rules;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Why an action was refused.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    ///
    /// A failure here is a bug in the transition, not a bad action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: tiles lie on the board, in one line, on distinct squares.
pub struct StructurallyValid;

impl StructurallyValid {
    /// Checks bounds first, then repeated squares, then alignment.
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), PlacementError> {
        match rules::structural_error(mov) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Precondition: every square the move places on is empty.
pub struct Vacant;

impl Vacant {
    /// Reports the first square that already holds a tile.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), PlacementError> {
        match rules::first_occupied(board.grid(), mov) {
            Some(pos) => Err(PlacementError::Occupied(pos)),
            None => Ok(()),
        }
    }
}

/// Precondition: the move touches an existing tile or covers the centre.
pub struct Anchored;

impl Anchored {
    /// Checks the move against the current grid.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), PlacementError> {
        if rules::has_anchor(board.grid(), mov) {
            Ok(())
        } else {
            Err(PlacementError::Unanchored)
        }
    }
}

/// Precondition: no empty square between the first and last tile.
pub struct Continuous;

impl Continuous {
    /// Reports the first empty square inside the span.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), PlacementError> {
        match rules::first_gap(board.grid(), mov) {
            Some(gap) => Err(PlacementError::Gap(gap)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: a placement is legal if it is well formed, lands
/// on empty squares, is anchored and is continuous. Checks run in that order
/// and stop at the first failure.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), PlacementError> {
        StructurallyValid::check(mov)?;
        Vacant::check(mov, board)?;
        Anchored::check(mov, board)?;
        Continuous::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a move.
///
/// Preconditions:
/// - Move is structurally valid
/// - Move only covers empty squares
/// - Move is anchored
/// - Move is continuous
///
/// Postconditions:
/// - Exactly one record was appended and earlier records are untouched
/// - Every tile on the board before is still there
/// - All board invariants hold
pub struct PlacementContract;

impl Contract<Board, Move> for PlacementContract {
    type Error = PlacementError;

    fn pre(board: &Board, action: &Move) -> Result<(), PlacementError> {
        LegalPlacement::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), InvariantViolation> {
        let (old, new) = (before.history(), after.history());
        if new.len() != old.len() + 1 || new[..old.len()] != *old {
            return Err(InvariantViolation::new(
                "Postcondition failed: history must grow by exactly one record",
            ));
        }

        let kept = before.rows().flatten().zip(after.rows().flatten()).all(
            |(was, is)| match was {
                Some(_) => was == is,
                None => true,
            },
        );
        if !kept {
            return Err(InvariantViolation::new(
                "Postcondition failed: existing tiles must not change",
            ));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariants violated");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all board invariants hold (panic on violation in debug builds).
#[instrument(skip(board))]
pub fn assert_invariants(board: &Board) {
    debug_assert!(
        BoardInvariants::check_all(board).is_ok(),
        "Board invariants violated"
    );
}
