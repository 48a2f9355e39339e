use crate::{board::Board, moves::Move, types::*};

/// Squares a piece might move toward, before any legality check.
///
/// A man gets its four diagonal neighbours whatever they hold. A king slides
/// along each diagonal collecting empty squares, then also yields the first
/// square that stops it (occupied or off the board) so that
/// [`try_create_move`] can turn an enemy there into a capture.
pub fn candidate_destinations(piece: &Piece, board: &Board) -> Vec<Square> {
    let from = piece.square;
    if !piece.king {
        return DIRECTIONS.iter().map(|&dir| from.step(dir)).collect();
    }

    let mut out = Vec::with_capacity(16);
    for dir in DIRECTIONS {
        let mut to = from.step(dir);
        while board.is_free(to) {
            out.push(to);
            to = to.step(dir);
        }
        out.push(to);
    }
    out
}

/// Turns a candidate destination into a hop, or `None` when it is illegal.
pub fn try_create_move(board: &Board, from: Square, to: Square, piece: &Piece) -> Option<Move> {
    let target = board.cell(to)?;
    if piece.side.owns(target) {
        return None;
    }

    let enemy = piece.side.opposite().owns(target);
    // Men only step backward when jumping.
    if !piece.king && piece.side.is_backward(from.row, to.row) && !enemy {
        return None;
    }

    let mut to = to;
    if enemy {
        to = to.step(from.direction_to(to));
    }
    if !board.is_free(to) {
        return None;
    }
    Some(Move::new(from, to, enemy, *piece))
}

pub fn legal_moves_for_piece(board: &Board, piece: &Piece) -> Vec<Move> {
    candidate_destinations(piece, board)
        .into_iter()
        .filter_map(|to| try_create_move(board, piece.square, to, piece))
        .collect()
}

/// Every first hop available to `side`, pieces scanned row by row.
pub fn starting_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .iter()
        .flat_map(|piece| legal_moves_for_piece(board, piece))
        .collect()
}

pub fn has_capture(board: &Board, side: Side) -> bool {
    starting_moves(board, side).iter().any(|mv| mv.capture)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
