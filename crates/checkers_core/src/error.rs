//! Error kinds raised at the engine boundary.
//!
//! The move engine itself never fails: illegal destinations are simply left
//! out of generated move sets. Errors only come from malformed input and from
//! asking for a move where none exists.

use thiserror::Error;

use crate::types::{Side, Square};

/// A grid handed in from outside could not be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} must have 8 cells, got {len}")]
    RowLength { row: usize, len: usize },
    #[error("invalid cell code {code} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, code: i64 },
    #[error("square {0} is outside the 8x8 board")]
    OutOfBounds(Square),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("{side} has no legal move")]
    NoLegalMove { side: Side },
    #[error("{path} is not a legal turn for {side}")]
    IllegalMove { side: Side, path: String },
}
