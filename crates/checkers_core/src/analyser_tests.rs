use super::*;
use crate::types::{Cell, Square};

fn grid(rows: [[i64; 8]; 8]) -> Board {
    Board::from_grid(&rows).unwrap()
}

fn rendered(moves: &[Move]) -> Vec<String> {
    moves.iter().map(ToString::to_string).collect()
}

#[test]
fn test_reconstruct_simple_step() {
    let from = Board::initial();
    let to = from
        .with(Square::new(5, 1), Cell::Empty)
        .with(Square::new(4, 2), Cell::BlackMan);

    let found = reconstruct(&from, &to, Side::Black);
    assert_eq!(rendered(&found), vec!["{(5, 1) -> (4, 2)}"]);
}

#[test]
fn test_reconstruct_wrong_side_finds_nothing() {
    let from = Board::initial();
    let to = from
        .with(Square::new(5, 1), Cell::Empty)
        .with(Square::new(4, 2), Cell::BlackMan);

    assert!(reconstruct(&from, &to, Side::White).is_empty());
}

#[test]
fn test_reconstruct_unrelated_boards_is_empty() {
    let from = Board::initial();
    let to = Board::empty().with(Square::new(0, 0), Cell::WhiteMan);
    assert!(reconstruct(&from, &to, Side::Black).is_empty());
    assert!(reconstruct(&from, &from, Side::Black).is_empty());
}

#[test]
fn test_reconstruct_white_capture() {
    let from = grid([
        [1, 0, 0, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 1],
        [0, 0, 0, 0, 1, 0, 1, 0],
        [0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 3, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ]);
    let to = grid([
        [1, 0, 0, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 1],
        [0, 0, 0, 0, 1, 0, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ]);

    let found = reconstruct(&from, &to, Side::White);
    assert_eq!(rendered(&found), vec!["{(3, 1) -> (5, 3)}"]);
}

#[test]
fn test_forced_capture_rejects_simple_explanation() {
    // Black could capture on (4,2); a plain step elsewhere is not a legal turn.
    let from = Board::empty()
        .with(Square::new(5, 1), Cell::BlackMan)
        .with(Square::new(4, 2), Cell::WhiteMan)
        .with(Square::new(6, 6), Cell::BlackMan);
    let stepped = from
        .with(Square::new(6, 6), Cell::Empty)
        .with(Square::new(5, 5), Cell::BlackMan);

    assert!(reconstruct(&from, &stepped, Side::Black).is_empty());

    let captured = from
        .with(Square::new(5, 1), Cell::Empty)
        .with(Square::new(4, 2), Cell::Empty)
        .with(Square::new(3, 3), Cell::BlackMan);
    let found = reconstruct(&from, &captured, Side::Black);
    assert_eq!(rendered(&found), vec!["{(5, 1) -> (3, 3)}"]);
}

#[test]
fn test_target_without_promotion_still_matches() {
    let from = Board::empty().with(Square::new(1, 3), Cell::BlackMan);
    // Snapshot records the man reaching row 0 without crowning it
    let as_man = Board::empty().with(Square::new(0, 2), Cell::BlackMan);
    let as_king = Board::empty().with(Square::new(0, 2), Cell::BlackKing);

    assert_eq!(rendered(&reconstruct(&from, &as_man, Side::Black)), vec!["{(1, 3) -> (0, 2)}"]);
    assert_eq!(rendered(&reconstruct(&from, &as_king, Side::Black)), vec!["{(1, 3) -> (0, 2)}"]);
}

#[test]
fn test_partial_chain_depends_on_policy() {
    let from = Board::empty()
        .with(Square::new(6, 0), Cell::BlackMan)
        .with(Square::new(5, 1), Cell::WhiteMan)
        .with(Square::new(3, 3), Cell::WhiteMan);
    // Stopped after the first of two available jumps
    let stopped = Board::empty()
        .with(Square::new(4, 2), Cell::BlackMan)
        .with(Square::new(3, 3), Cell::WhiteMan);

    let lenient = reconstruct_with(&from, &stopped, Side::Black, MatchPolicy::EveryState);
    assert_eq!(rendered(&lenient), vec!["{(6, 0) -> (4, 2)}"]);

    let strict = reconstruct_with(&from, &stopped, Side::Black, MatchPolicy::CompleteOnly);
    assert!(strict.is_empty());
}

#[test]
fn test_ambiguous_capture_orders_are_all_reported() {
    // The man can run the diamond of four white men either way round and
    // comes back to its own square with the same four pieces gone.
    let from = Board::empty()
        .with(Square::new(6, 2), Cell::BlackMan)
        .with(Square::new(5, 1), Cell::WhiteMan)
        .with(Square::new(3, 1), Cell::WhiteMan)
        .with(Square::new(3, 3), Cell::WhiteMan)
        .with(Square::new(5, 3), Cell::WhiteMan);
    let to = Board::empty().with(Square::new(6, 2), Cell::BlackMan);

    let found = reconstruct(&from, &to, Side::Black);
    assert_eq!(
        rendered(&found),
        vec![
            "{(6, 2) -> (4, 0) -> (2, 2) -> (4, 4) -> (6, 2)}",
            "{(6, 2) -> (4, 4) -> (2, 2) -> (4, 0) -> (6, 2)}",
        ]
    );
    assert!(found.iter().all(|mv| mv.captures() == 4));
}
