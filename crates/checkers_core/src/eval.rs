use crate::{board::Board, types::Side};

/// Material balance from `perspective`: own pieces minus enemy pieces.
/// Kings and men count the same.
pub fn material_balance(board: &Board, perspective: Side) -> i32 {
    board.count(perspective) as i32 - board.count(perspective.opposite()) as i32
}
