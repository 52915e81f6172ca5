//! Strictly Scrabble - Unified CLI
//!
//! Replays games written in move notation and prints scores, challenge
//! words and the final board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_scrabble::{Board, BoardError, Move, RulesConfig, layout_string};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Replay { file, rules, json } => run_replay(&file, rules.as_deref(), json),
        Command::Premiums => {
            print!("{}", layout_string());
            Ok(())
        }
    }
}

/// One non-comment line of a game file.
struct GameLine<'a> {
    number: usize,
    notation: String,
    blanks: Option<&'a str>,
}

/// Splits a game file into move lines, skipping blanks and comments.
fn parse_game(content: &str) -> Result<Vec<GameLine<'_>>> {
    let mut lines = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (notation, blanks) = match tokens.as_slice() {
            [pos, tiles] => (format!("{pos} {tiles}"), None),
            [pos, tiles, blanks] => (format!("{pos} {tiles}"), Some(*blanks)),
            _ => anyhow::bail!("line {}: expected \"<pos> <tiles> [<blanks>]\"", index + 1),
        };
        lines.push(GameLine {
            number: index + 1,
            notation,
            blanks,
        });
    }
    Ok(lines)
}

/// Replays a game file onto a fresh board.
#[instrument(skip(rules_path))]
fn run_replay(path: &Path, rules_path: Option<&Path>, json: bool) -> Result<()> {
    let rules = match rules_path {
        Some(p) => RulesConfig::from_file(p)?,
        None => RulesConfig::default(),
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read game file {}", path.display()))?;

    let mut board = Board::with_rules(rules);
    let mut total = 0;
    for line in parse_game(&content)? {
        let mov: Move = line
            .notation
            .parse()
            .with_context(|| format!("line {}: bad move {:?}", line.number, line.notation))?;

        let score = match board.apply_move(mov) {
            Ok(score) => score,
            Err(err) => {
                warn!(line = line.number, %err, "Move rejected");
                if !json {
                    println!("{:>3}. {:<16} rejected: {}", line.number, line.notation, err);
                }
                continue;
            }
        };
        total += score;

        if let Some(letters) = line.blanks {
            board
                .set_blanks(letters)
                .with_context(|| format!("line {}: bad blank letters {letters:?}", line.number))?;
        }

        if !json {
            let words = match board.challenge_words() {
                Ok(words) => words.into_iter().collect::<Vec<_>>().join(", "),
                Err(BoardError::UnresolvedBlanks(n) | BoardError::EarlierBlanksUnresolved(n)) => {
                    format!("({n} unresolved blank(s))")
                }
                Err(err) => return Err(err.into()),
            };
            println!(
                "{:>3}. {:<16} {:>4}  {}",
                line.number,
                board.format_move(-1)?,
                score,
                words
            );
        }
    }

    info!(moves = board.history().len(), total, "Replay finished");
    if json {
        println!("{}", serde_json::to_string_pretty(board.history())?);
    } else {
        println!("Total: {total}");
        print!("{board}");
    }
    Ok(())
}
