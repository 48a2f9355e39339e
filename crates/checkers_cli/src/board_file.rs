//! Board files and move reports
//!
//! A board file is a JSON 8x8 array of cell codes, top row first.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::Path;

use checkers_core::{Board, Move, Square};

/// Load and validate a board from a JSON file
pub fn load_board(path: &Path) -> Result<Board> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_board(&contents).with_context(|| format!("Invalid board in {}", path.display()))
}

pub fn parse_board(text: &str) -> Result<Board> {
    Ok(serde_json::from_str(text)?)
}

/// Parses `row,col`, e.g. `5,1`.
pub fn parse_square(text: &str) -> Result<Square> {
    let Some((row, col)) = text.split_once(',') else {
        bail!("Expected a square as row,col, got `{text}`");
    };
    let row: i8 = row
        .trim()
        .parse()
        .with_context(|| format!("Bad row in `{text}`"))?;
    let col: i8 = col
        .trim()
        .parse()
        .with_context(|| format!("Bad column in `{text}`"))?;
    Ok(Square::new(row, col))
}

/// A turn as printed in `--json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Origin then every landing square, as `[row, col]` pairs
    pub path: Vec<[i8; 2]>,
    pub captures: usize,
    pub text: String,
}

impl From<&Move> for MoveReport {
    fn from(mv: &Move) -> Self {
        Self {
            path: mv.path().iter().map(|sq| [sq.row, sq.col]).collect(),
            captures: mv.captures(),
            text: mv.to_string(),
        }
    }
}

pub fn moves_to_json(moves: &[Move]) -> Result<String> {
    let reports: Vec<MoveReport> = moves.iter().map(MoveReport::from).collect();
    serde_json::to_string_pretty(&reports).context("Failed to serialize moves")
}

pub fn board_to_json(board: &Board) -> Result<String> {
    serde_json::to_string(board).context("Failed to serialize board")
}

#[cfg(test)]
#[path = "board_file_tests.rs"]
mod board_file_tests;
