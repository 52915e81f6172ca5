//! Game implementations.

pub mod scrabble;
