//! Checkers move engine.
//!
//! Two questions are answered from plain 8x8 boards:
//! - which turn turned one board into another ([`reconstruct_move`]);
//! - which turn to play next ([`recommend_move`]).
//!
//! Cell codes: 0 empty, 1 white man, 2 white king, 3 black man, 4 black king.

pub mod analyser;
pub mod board;
pub mod chain;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod moves;
pub mod search;
pub mod types;

pub use analyser::*;
pub use board::*;
pub use chain::*;
pub use error::*;
pub use eval::material_balance;
pub use movegen::*;
pub use moves::Move;
pub use search::*;
pub use types::*;

use tracing::debug;

// =============================================================================
// Engine trait — implemented by every move-picking engine (lookahead, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen turn
    pub best_move: Move,
    /// Material balance of the leaf that justified the choice, from the
    /// searching side's perspective
    pub score: i32,
    /// Turns searched along each branch
    pub depth: u8,
    /// Number of leaves scored
    pub leaves: u64,
}

/// Trait that all checkers engines must implement.
pub trait Engine: Send {
    /// Choose a turn for `side` on `board`.
    ///
    /// Fails with [`EngineError::NoLegalMove`] when `side` cannot move.
    fn choose(&mut self, board: &Board, side: Side) -> Result<SearchResult, EngineError>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

// =============================================================================
// Boundary entry points on raw integer grids
// =============================================================================

/// Every turn of `side` that explains the transition from `from` to `to`.
///
/// Both grids are validated first. An empty list means no legal turn fits.
pub fn reconstruct_move<R: AsRef<[i64]>>(
    from: &[R],
    to: &[R],
    side: Side,
) -> Result<Vec<Move>, EngineError> {
    let from = Board::from_grid(from)?;
    let to = Board::from_grid(to)?;
    debug!(%side, "reconstruct_move\n{from}\n->\n{to}");
    Ok(reconstruct(&from, &to, side))
}

/// The turn the lookahead search recommends for `side`.
pub fn recommend_move<R: AsRef<[i64]>>(grid: &[R], side: Side) -> Result<Move, EngineError> {
    let board = Board::from_grid(grid)?;
    debug!(%side, "recommend_move\n{board}");
    Ok(recommend(&board, side)?.best_move)
}
