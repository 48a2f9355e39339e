use super::*;

fn place(pieces: &[(i8, i8, Cell)]) -> Board {
    pieces
        .iter()
        .fold(Board::empty(), |b, &(r, c, cell)| b.with(Square::new(r, c), cell))
}

fn destinations(moves: &[Move]) -> Vec<Square> {
    moves.iter().map(|m| m.to).collect()
}

#[test]
fn test_man_candidates_are_four_neighbours_in_order() {
    let board = place(&[(5, 1, Cell::BlackMan), (4, 2, Cell::WhiteMan)]);
    let piece = Piece::new(Square::new(5, 1), Side::Black, false);

    assert_eq!(
        candidate_destinations(&piece, &board),
        vec![
            Square::new(4, 0),
            Square::new(4, 2),
            Square::new(6, 0),
            Square::new(6, 2),
        ]
    );
}

#[test]
fn test_king_candidates_include_boundary_squares() {
    let board = place(&[(5, 1, Cell::BlackKing), (3, 3, Cell::WhiteMan)]);
    let piece = Piece::new(Square::new(5, 1), Side::Black, true);

    assert_eq!(
        candidate_destinations(&piece, &board),
        vec![
            // up-left: one empty square, then off the board
            Square::new(4, 0),
            Square::new(3, -1),
            // up-right: stops on the white man
            Square::new(4, 2),
            Square::new(3, 3),
            // down-left
            Square::new(6, 0),
            Square::new(7, -1),
            // down-right
            Square::new(6, 2),
            Square::new(7, 3),
            Square::new(8, 4),
        ]
    );
}

#[test]
fn test_initial_position_has_seven_simple_moves() {
    let board = Board::initial();
    for side in [Side::White, Side::Black] {
        let moves = starting_moves(&board, side);
        assert_eq!(moves.len(), 7, "{side}");
        assert!(moves.iter().all(|m| !m.capture));
    }
}

#[test]
fn test_man_moves_forward_only_when_not_capturing() {
    let board = place(&[(4, 3, Cell::BlackMan)]);
    let piece = board.pieces(Side::Black)[0];
    let moves = legal_moves_for_piece(&board, &piece);

    assert_eq!(destinations(&moves), vec![Square::new(3, 2), Square::new(3, 4)]);

    let board = place(&[(4, 3, Cell::WhiteMan)]);
    let piece = board.pieces(Side::White)[0];
    let moves = legal_moves_for_piece(&board, &piece);
    assert_eq!(destinations(&moves), vec![Square::new(5, 2), Square::new(5, 4)]);
}

#[test]
fn test_man_captures_backward() {
    let board = place(&[(3, 3, Cell::BlackMan), (4, 4, Cell::WhiteMan)]);
    let piece = board.pieces(Side::Black)[0];
    let moves = legal_moves_for_piece(&board, &piece);

    let capture = moves.iter().find(|m| m.capture).expect("backward capture");
    assert_eq!(capture.from, Square::new(3, 3));
    assert_eq!(capture.to, Square::new(5, 5));
}

#[test]
fn test_capture_needs_free_landing() {
    // Landing square occupied
    let board = place(&[
        (5, 1, Cell::BlackMan),
        (4, 2, Cell::WhiteMan),
        (3, 3, Cell::WhiteMan),
    ]);
    let piece = board.pieces(Side::Black)[0];
    assert!(!has_capture(&board, Side::Black));
    assert_eq!(
        destinations(&legal_moves_for_piece(&board, &piece)),
        vec![Square::new(4, 0)]
    );

    // Landing square off the board
    let board = place(&[(1, 1, Cell::BlackMan), (0, 0, Cell::WhiteMan)]);
    assert!(!has_capture(&board, Side::Black));
}

#[test]
fn test_try_create_move_rules() {
    let board = place(&[
        (5, 1, Cell::BlackMan),
        (4, 0, Cell::BlackMan),
        (4, 2, Cell::WhiteMan),
    ]);
    let piece = Piece::new(Square::new(5, 1), Side::Black, false);
    let from = piece.square;

    // Off the board
    assert!(try_create_move(&board, from, Square::new(5, -1), &piece).is_none());
    // Friendly piece
    assert!(try_create_move(&board, from, Square::new(4, 0), &piece).is_none());
    // Backward simple step for a man
    assert!(try_create_move(&board, from, Square::new(6, 2), &piece).is_none());
    // Enemy becomes a capture landing one square further
    let mv = try_create_move(&board, from, Square::new(4, 2), &piece).unwrap();
    assert!(mv.capture);
    assert_eq!(mv.to, Square::new(3, 3));
    assert_eq!(mv.piece, piece);
    assert!(mv.prev().is_none());
}

#[test]
fn test_king_slides_and_captures_at_distance() {
    let board = place(&[(7, 1, Cell::WhiteKing), (4, 4, Cell::BlackMan)]);
    let piece = board.pieces(Side::White)[0];
    let moves = legal_moves_for_piece(&board, &piece);

    let simple: Vec<Square> = moves.iter().filter(|m| !m.capture).map(|m| m.to).collect();
    assert_eq!(
        simple,
        vec![Square::new(6, 0), Square::new(6, 2), Square::new(5, 3)]
    );

    let captures: Vec<&Move> = moves.iter().filter(|m| m.capture).collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to, Square::new(3, 5));
}

#[test]
fn test_king_moves_backward() {
    let board = place(&[(3, 3, Cell::BlackKing)]);
    let piece = board.pieces(Side::Black)[0];
    let moves = legal_moves_for_piece(&board, &piece);
    // 3 + 3 + 3 + 4 empty squares along the diagonals
    assert_eq!(moves.len(), 13);
    assert!(moves.iter().any(|m| m.to == Square::new(7, 7)));
}
