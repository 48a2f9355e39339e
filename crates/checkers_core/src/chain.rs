//! Capture-chain resolution.
//!
//! A capture hop is extended recursively: after each jump the (possibly just
//! promoted) piece looks for further jumps from its landing square, and each
//! available jump opens its own branch. Branches are returned by value and
//! concatenated, so no branch ever sees another's board.

use std::sync::Arc;

use tracing::trace;

use crate::{
    board::Board,
    error::EngineError,
    movegen::{legal_moves_for_piece, starting_moves},
    moves::Move,
    types::*,
};

/// A board reached partway through (or at the end of) a turn.
#[derive(Clone, Debug)]
pub struct TurnState {
    /// Last hop played; earlier hops hang off its back-links.
    pub chain: Move,
    pub board: Board,
    /// No capture continuation exists from here.
    pub complete: bool,
}

/// A finished turn and the board it leaves behind.
#[derive(Clone, Debug)]
pub struct Turn {
    pub chain: Move,
    pub board: Board,
}

/// Plays one hop: the mover leaves its origin, lands on `hop.to`, and a
/// captured piece (the square just before the landing) is removed. Landing
/// on the promotion row crowns the piece; the returned piece reflects that.
pub fn apply_hop(board: &Board, hop: &Move) -> (Board, Piece) {
    let mut piece = hop.piece;
    piece.square = hop.to;
    if hop.to.row == piece.side.promotion_row() {
        piece.king = true;
    }

    let mut next = board.with(hop.from, Cell::Empty).with(hop.to, piece.cell());
    if hop.capture {
        let (dr, dc) = hop.from.direction_to(hop.to);
        next = next.with(hop.to.step((-dr, -dc)), Cell::Empty);
    }
    (next, piece)
}

/// Every state reachable by playing `hop` and then any sequence of further
/// captures by the same piece. Simple hops yield a single complete state.
pub fn expand_turn(board: &Board, hop: Move) -> Vec<TurnState> {
    let (next, piece) = apply_hop(board, &hop);
    if !hop.capture {
        return vec![TurnState {
            chain: hop,
            board: next,
            complete: true,
        }];
    }

    let continuations: Vec<Move> = legal_moves_for_piece(&next, &piece)
        .into_iter()
        .filter(|mv| mv.capture)
        .collect();
    trace!(
        from = %hop.from,
        to = %hop.to,
        continuations = continuations.len(),
        "capture hop"
    );

    if continuations.is_empty() {
        return vec![TurnState {
            chain: hop,
            board: next,
            complete: true,
        }];
    }

    let prev = Arc::new(hop);
    let mut out = vec![TurnState {
        chain: (*prev).clone(),
        board: next,
        complete: false,
    }];
    for cont in continuations {
        out.extend(expand_turn(&next, cont.after(Arc::clone(&prev))));
    }
    out
}

/// Resolves a capture hop into its completed chains only.
pub fn resolve_captures(board: &Board, hop: Move) -> Vec<Turn> {
    expand_turn(board, hop)
        .into_iter()
        .filter(|state| state.complete)
        .map(|state| Turn {
            chain: state.chain,
            board: state.board,
        })
        .collect()
}

/// First hops `side` is allowed to start a turn with: captures only when any
/// capture exists, otherwise every simple hop.
pub fn opening_hops(board: &Board, side: Side) -> Vec<Move> {
    let (captures, simple): (Vec<Move>, Vec<Move>) =
        starting_moves(board, side).into_iter().partition(|mv| mv.capture);
    if captures.is_empty() {
        simple
    } else {
        captures
    }
}

/// Every legal complete turn for `side`, with the forced-capture rule applied.
pub fn complete_turns(board: &Board, side: Side) -> Vec<Turn> {
    opening_hops(board, side)
        .into_iter()
        .flat_map(|hop| resolve_captures(board, hop))
        .collect()
}

/// Plays the turn whose path (origin then each landing square) is `path`.
/// Only legal complete turns are accepted.
pub fn play_path(board: &Board, path: &[Square], side: Side) -> Result<Turn, EngineError> {
    for sq in path {
        board.checked_cell(*sq)?;
    }
    complete_turns(board, side)
        .into_iter()
        .find(|turn| turn.chain.path() == path)
        .ok_or_else(|| EngineError::IllegalMove {
            side,
            path: path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> "),
        })
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod chain_tests;
