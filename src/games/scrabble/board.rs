//! The game board: tile grid plus the log of accepted moves.

use super::action::{Move, MoveError, PlacementError};
use super::contracts::{Contract, PlacementContract, assert_invariants};
use super::invariants::InvariantViolation;
use super::notation::format_position;
use super::position::{BOARD_SIZE, Position};
use super::rules;
use super::tile::Tile;
use super::types::{Grid, MoveRecord};
use crate::RulesConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// A 15x15 board and the ordered history of moves played on it.
///
/// The grid is the source of truth for scoring and word extraction; the
/// history is an audit log of what was accepted and what it scored.
/// Every mutation either fully succeeds or leaves the board untouched.
///
/// A deserialized board is rebuilt by replaying its history, so it is only
/// accepted if every move is legal, scores what was recorded and the result
/// matches the stored grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardShape")]
pub struct Board {
    pub(super) grid: Grid,
    pub(super) history: Vec<MoveRecord>,
    rules: RulesConfig,
}

/// Serialized form of a [`Board`].
#[derive(Deserialize)]
struct BoardShape {
    grid: Grid,
    history: Vec<MoveRecord>,
    rules: RulesConfig,
}

impl TryFrom<BoardShape> for Board {
    type Error = InvariantViolation;

    fn try_from(shape: BoardShape) -> Result<Self, Self::Error> {
        let mut board = Board::with_rules(shape.rules);
        for (index, record) in shape.history.into_iter().enumerate() {
            let recorded = record.score();
            let score = board.apply_move(record.into_action()).map_err(|err| {
                InvariantViolation::new(format!("Move {index} cannot be replayed: {err}"))
            })?;
            if score != recorded {
                return Err(InvariantViolation::new(format!(
                    "Move {index} scores {score}, recorded as {recorded}"
                )));
            }
        }

        if board.grid != shape.grid {
            return Err(InvariantViolation::new(
                "Grid does not match the tiles placed by the history",
            ));
        }
        Ok(board)
    }
}

impl Board {
    /// Creates an empty board with the standard rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    /// Creates an empty board with custom rules.
    #[instrument]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            grid: Grid::new(),
            history: Vec::new(),
            rules,
        }
    }

    /// Tile at `pos`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.grid.get(pos)
    }

    /// The tile grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>; BOARD_SIZE as usize]> {
        self.grid.rows()
    }

    /// Accepted moves in play order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(MoveRecord::action)
    }

    /// Accepted moves with their scores, in play order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Rules applied when scoring.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// True if no move has been accepted.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Validates a move against the board and, if it fits, places it and
    /// records its score.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks: tiles not in one line, a
    /// repeated or off-board square, no anchor, or a gap in the word span.
    /// Nothing is placed or recorded on error.
    #[instrument(skip(self, mov), fields(tiles = mov.len(), start = %mov.start()))]
    pub fn apply_move(&mut self, mov: Move) -> Result<u32, PlacementError> {
        if let Err(err) = PlacementContract::pre(self, &mov) {
            debug!(%err, "Placement rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        for placement in &mov {
            self.grid.place(placement.position, placement.tile);
        }
        let score = rules::score_move(&self.grid, &mov, &self.rules);
        self.history.push(MoveRecord::new(mov, score));

        #[cfg(debug_assertions)]
        if let Err(violation) = PlacementContract::post(&before, self) {
            panic!("{violation}");
        }

        info!(score, moves = self.history.len(), "Move applied");
        Ok(score)
    }

    /// Resolves the unset blanks of the latest move, in board order.
    ///
    /// # Errors
    ///
    /// [`BoardError::NoMoves`] on an empty history, [`BoardError::Blank`] if
    /// the letters do not fit. No blank is resolved on error.
    #[instrument(skip(self))]
    pub fn set_blanks(&mut self, letters: &str) -> Result<(), BoardError> {
        let record = self.history.last_mut().ok_or(BoardError::NoMoves)?;
        record.action_mut().set_blanks(letters).map_err(BoardError::Blank)?;

        for placement in record.action() {
            self.grid.replace(placement.position, placement.tile);
        }
        Ok(())
    }

    /// Score of a recorded move. Negative indices count from the end.
    #[instrument(skip(self))]
    pub fn get_score(&self, index: isize) -> Result<u32, BoardError> {
        let index = self.resolve_index(index)?;
        Ok(self.history[index].score())
    }

    /// Score of the latest move.
    pub fn latest_score(&self) -> Result<u32, BoardError> {
        self.get_score(-1)
    }

    /// Takes back the latest move, clearing its tiles from the grid, and
    /// returns its score.
    ///
    /// Only the latest move can be undone: later moves may lean on earlier
    /// ones for their anchor or their words.
    ///
    /// # Errors
    ///
    /// [`BoardError::IndexOutOfRange`] for a bad index,
    /// [`BoardError::UndoNotLatest`] for any move but the last.
    #[instrument(skip(self))]
    pub fn undo_move(&mut self, index: isize) -> Result<u32, BoardError> {
        let resolved = self.resolve_index(index)?;
        if resolved + 1 != self.history.len() {
            return Err(BoardError::UndoNotLatest(index));
        }

        let Some(record) = self.history.pop() else {
            return Err(BoardError::NoMoves);
        };
        let score = record.score();
        for position in record.into_action().positions() {
            self.grid.remove(position);
        }

        assert_invariants(self);
        info!(score, moves = self.history.len(), "Move undone");
        Ok(score)
    }

    /// Distinct words formed by the latest move, for a dictionary challenge.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnresolvedBlanks`] while a blank of the latest move has
    /// no letter yet; [`Board::set_blanks`] fixes that.
    /// [`BoardError::EarlierBlanksUnresolved`] when the words run through a
    /// blank left unresolved by an earlier move. Only the latest move takes
    /// blank letters, so this one is final for the current history.
    /// [`BoardError::NoMoves`] on an empty history.
    #[instrument(skip(self))]
    pub fn challenge_words(&self) -> Result<BTreeSet<String>, BoardError> {
        let record = self.history.last().ok_or(BoardError::NoMoves)?;
        let unset = record.action().unset_blanks();
        if unset > 0 {
            return Err(BoardError::UnresolvedBlanks(unset));
        }

        rules::words_formed(&self.grid, record.action()).ok_or_else(|| {
            let unresolved = self
                .grid
                .rows()
                .flatten()
                .filter(|square| square.is_some_and(|tile| !tile.is_set()))
                .count();
            debug!(unresolved, "Challenge blocked by blanks from earlier moves");
            BoardError::EarlierBlanksUnresolved(unresolved)
        })
    }

    /// Renders a recorded move as notation spanning its whole main word,
    /// with `.` for each letter it played through.
    ///
    /// The word is read from the board as it stood right after that move.
    #[instrument(skip(self))]
    pub fn format_move(&self, index: isize) -> Result<String, BoardError> {
        let index = self.resolve_index(index)?;

        // Later moves may have built onto this word, so rebuild the grid up to it
        let mut grid = Grid::new();
        for record in &self.history[..=index] {
            for placement in record.action() {
                grid.place(placement.position, placement.tile);
            }
        }

        let mov = self.history[index].action();
        let mut direction = mov.direction();
        // A lone tile is written along whichever axis it made a word on
        if mov.len() == 1 && !rules::forms_new_word(&grid, mov.start(), direction) {
            direction = direction.opposite();
        }
        let run = rules::tiles_through(&grid, mov.start(), direction);
        let tiles: String = run
            .iter()
            .map(|(tile, pos)| if mov.covers(*pos) { tile.notation() } else { '.' })
            .collect();
        Ok(format!("{} {}", format_position(run[0].1, direction), tiles))
    }

    fn resolve_index(&self, index: isize) -> Result<usize, BoardError> {
        let len = self.history.len() as isize;
        let resolved = if index < 0 { len + index } else { index };
        if (0..len).contains(&resolved) {
            Ok(resolved as usize)
        } else if len == 0 {
            Err(BoardError::NoMoves)
        } else {
            Err(BoardError::IndexOutOfRange(index))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = format!("{}+", "+-".repeat(BOARD_SIZE as usize));
        writeln!(f, "{separator}")?;
        for row in self.rows() {
            for square in row {
                match square {
                    Some(tile) => write!(f, "|{tile}")?,
                    None => write!(f, "| ")?,
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

/// Error from querying or editing the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// No move has been accepted yet.
    #[display("No moves have been played")]
    NoMoves,

    /// Index outside the history.
    #[display("No move at index {}", _0)]
    IndexOutOfRange(isize),

    /// Only the latest move can be taken back.
    #[display("Only the latest move can be undone, not index {}", _0)]
    UndoNotLatest(isize),

    /// Words cannot be spelled until the latest move's blanks have letters.
    #[display("{} blank tile(s) still need a letter", _0)]
    UnresolvedBlanks(usize),

    /// The words run through blanks that earlier moves never resolved.
    #[display("{} blank tile(s) from earlier moves have no letter", _0)]
    EarlierBlanksUnresolved(usize),

    /// Blank letters were rejected.
    #[display("{}", _0)]
    Blank(MoveError),
}

impl std::error::Error for BoardError {}
