use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// An 8x8 checkers board.
///
/// `Board` is a small `Copy` value: every update returns a fresh board, so a
/// recursive search can branch from one state without any branch observing
/// another's changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")
)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Standard opening: white men on the dark squares of rows 0-2, black
    /// men on rows 5-7.
    pub fn initial() -> Self {
        let mut cells = [[Cell::Empty; 8]; 8];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if (r + c) % 2 != 0 {
                    continue;
                }
                *cell = match r {
                    0..=2 => Cell::WhiteMan,
                    5..=7 => Cell::BlackMan,
                    _ => Cell::Empty,
                };
            }
        }
        Self { cells }
    }

    /// Validates a caller-supplied integer grid.
    pub fn from_grid<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::RowCount(rows.len()));
        }
        let mut cells = [[Cell::Empty; 8]; 8];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE as usize {
                return Err(BoardError::RowLength {
                    row: r,
                    len: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                cells[r][c] = Cell::from_code(code).ok_or(BoardError::InvalidCell {
                    row: r,
                    col: c,
                    code,
                })?;
            }
        }
        Ok(Self { cells })
    }

    /// Cell at `sq`, or `None` when the square is off the board.
    #[inline]
    pub fn cell(&self, sq: Square) -> Option<Cell> {
        if sq.in_bounds() {
            Some(self.cells[sq.row as usize][sq.col as usize])
        } else {
            None
        }
    }

    pub fn checked_cell(&self, sq: Square) -> Result<Cell, BoardError> {
        self.cell(sq).ok_or(BoardError::OutOfBounds(sq))
    }

    /// True when `sq` is on the board and empty.
    #[inline]
    pub fn is_free(&self, sq: Square) -> bool {
        self.cell(sq) == Some(Cell::Empty)
    }

    /// Returns a copy with `sq` set to `cell`. Off-board squares leave the
    /// board unchanged.
    #[must_use]
    pub fn with(&self, sq: Square, cell: Cell) -> Board {
        let mut next = *self;
        if sq.in_bounds() {
            next.cells[sq.row as usize][sq.col as usize] = cell;
        }
        next
    }

    /// Pieces of `side` in row-major order.
    pub fn pieces(&self, side: Side) -> Vec<Piece> {
        let mut out = Vec::with_capacity(12);
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if side.owns(cell) {
                    out.push(Piece::new(
                        Square::new(r as i8, c as i8),
                        side,
                        cell.is_king(),
                    ));
                }
            }
        }
        out
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| side.owns(cell))
            .count()
    }

    /// The side still holding pieces once the other has none. An empty
    /// board has no winner.
    pub fn winner(&self) -> Option<Side> {
        match (self.count(Side::White), self.count(Side::Black)) {
            (0, 0) => None,
            (_, 0) => Some(Side::White),
            (0, _) => Some(Side::Black),
            _ => None,
        }
    }

    /// Same occupancy with every king written as a man of its side.
    #[must_use]
    pub fn normalized(&self) -> Board {
        let mut next = *self;
        for cell in next.cells.iter_mut().flatten() {
            *cell = cell.as_man();
        }
        next
    }

    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        self.cells.map(|row| row.map(Cell::code))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Board::from_grid(&rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.to_codes().iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board\n{self}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r} ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::WhiteMan => 'w',
                    Cell::WhiteKing => 'W',
                    Cell::BlackMan => 'b',
                    Cell::BlackKing => 'B',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
