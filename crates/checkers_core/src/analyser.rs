//! Reconstructs the turn that turned one board snapshot into another.
//!
//! Every legal turn from the source board is played forward and each board
//! it passes through is compared with the target. Boards are compared with
//! kings folded into men, so snapshots that do not record promotions still
//! match.

use tracing::debug;

use crate::{
    board::Board,
    chain::{expand_turn, opening_hops},
    moves::Move,
    types::Side,
};

/// Which states of a turn may be matched against the target board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchPolicy {
    /// Any board along a chain, including one where a capture sequence
    /// stopped before running out of jumps.
    #[default]
    EveryState,
    /// Only the board left by a chain with no capture continuation.
    CompleteOnly,
}

/// Every turn of `side` leading from `from` to `to`.
///
/// An empty result means no legal turn explains the transition.
pub fn reconstruct(from: &Board, to: &Board, side: Side) -> Vec<Move> {
    reconstruct_with(from, to, side, MatchPolicy::default())
}

pub fn reconstruct_with(from: &Board, to: &Board, side: Side, policy: MatchPolicy) -> Vec<Move> {
    let target = to.normalized();
    let found: Vec<Move> = opening_hops(from, side)
        .into_iter()
        .flat_map(|hop| expand_turn(from, hop))
        .filter(|state| policy == MatchPolicy::EveryState || state.complete)
        .filter(|state| state.board.normalized() == target)
        .map(|state| state.chain)
        .collect();
    debug!(%side, ?policy, matches = found.len(), "reconstructed turn");
    found
}

#[cfg(test)]
#[path = "analyser_tests.rs"]
mod analyser_tests;
