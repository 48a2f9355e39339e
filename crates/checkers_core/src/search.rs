//! Depth-bounded lookahead.
//!
//! The tree alternates sides turn by turn, but every leaf is scored from the
//! point of view of the side that asked for a move, and the best leaf
//! anywhere in the tree wins. The opponent is therefore not modelled as
//! adversarial: this is a greedy lookahead, not minimax.

use tracing::debug;

use crate::{
    board::Board,
    chain::complete_turns,
    error::EngineError,
    eval::material_balance,
    moves::Move,
    types::Side,
    Engine, SearchResult,
};

/// Turns searched along each branch, the requester's own turn included.
pub const DEFAULT_DEPTH: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of turns played along a branch. Zero is treated as one.
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Picks a turn for `side` with the default depth.
pub fn recommend(board: &Board, side: Side) -> Result<SearchResult, EngineError> {
    recommend_with(board, side, SearchLimits::default())
}

/// Picks the first turn leading to the highest-scoring leaf. Ties keep the
/// leaf found first. A branch that dead-ends on a blocked side yields no
/// leaves; if every branch does, the first legal turn is returned.
pub fn recommend_with(
    board: &Board,
    side: Side,
    limits: SearchLimits,
) -> Result<SearchResult, EngineError> {
    let depth = limits.depth.max(1);
    let turns = complete_turns(board, side);
    let Some(first) = turns.first() else {
        return Err(EngineError::NoLegalMove { side });
    };
    let fallback = (first.chain.clone(), material_balance(&first.board, side));

    let mut leaves = 0u64;
    let mut best: Option<(Move, i32)> = None;
    for turn in turns {
        let Some(score) = best_leaf(&turn.board, side.opposite(), side, depth - 1, &mut leaves)
        else {
            continue;
        };
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((turn.chain, score));
        }
    }

    let (best_move, score) = best.unwrap_or(fallback);
    debug!(%side, %best_move, score, leaves, "lookahead finished");
    Ok(SearchResult {
        best_move,
        score,
        depth,
        leaves,
    })
}

/// Highest leaf score in the subtree below `board`, `to_move` to play.
/// `None` when no branch reaches a leaf: the side to move is blocked before
/// a win or the depth limit ends the line.
fn best_leaf(
    board: &Board,
    to_move: Side,
    perspective: Side,
    remaining: u8,
    leaves: &mut u64,
) -> Option<i32> {
    if remaining == 0 || board.winner().is_some() {
        *leaves += 1;
        return Some(material_balance(board, perspective));
    }

    complete_turns(board, to_move)
        .iter()
        .filter_map(|turn| {
            best_leaf(&turn.board, to_move.opposite(), perspective, remaining - 1, leaves)
        })
        .max()
}

/// Engine wrapper around [`recommend_with`].
#[derive(Debug, Clone, Default)]
pub struct LookaheadEngine {
    limits: SearchLimits,
}

impl LookaheadEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }
}

impl Engine for LookaheadEngine {
    fn choose(&mut self, board: &Board, side: Side) -> Result<SearchResult, EngineError> {
        recommend_with(board, side, self.limits)
    }

    fn name(&self) -> &str {
        "Lookahead v1.0"
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
