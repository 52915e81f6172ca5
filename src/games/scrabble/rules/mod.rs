//! Placement and scoring rules.
//!
//! This module contains pure functions over a [`Grid`](super::Grid) and a
//! [`Move`](super::Move). Rules are separated from board storage so the
//! contract layer can compose them.

pub mod placement;
pub mod runs;
pub mod scoring;

pub use placement::{first_gap, first_occupied, has_anchor, structural_error};
pub use runs::{forms_new_word, tiles_through, word_through, words_formed};
pub use scoring::{score_move, score_run};
