//! Command-line interface for strictly_scrabble.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Scrabble - Type-safe Scrabble rules engine
#[derive(Parser, Debug)]
#[command(name = "strictly_scrabble")]
#[command(about = "Replay and score Scrabble games from move notation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug" or "strictly_scrabble=trace"
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a game file, one move per line
    ///
    /// Each line is "<pos> <tiles> [<blank letters>]", e.g. "8H ABANDON" or
    /// "F8 .NSI?T s". Lines starting with '#' are ignored.
    Replay {
        /// Path to the game file
        file: PathBuf,

        /// Path to a TOML rules file
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Print the accepted moves as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the premium square layout
    Premiums,
}
