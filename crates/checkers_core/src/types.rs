use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const BOARD_SIZE: i8 = 8;

/// Diagonal unit steps in generation order: up-left, up-right, down-left, down-right.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn man(self) -> Cell {
        match self {
            Side::White => Cell::WhiteMan,
            Side::Black => Cell::BlackMan,
        }
    }

    pub fn king(self) -> Cell {
        match self {
            Side::White => Cell::WhiteKing,
            Side::Black => Cell::BlackKing,
        }
    }

    /// Last row reachable by this side's men; landing there promotes.
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::White => BOARD_SIZE - 1,
            Side::Black => 0,
        }
    }

    /// White advances toward higher rows, Black toward row 0.
    pub fn is_backward(self, from_row: i8, to_row: i8) -> bool {
        match self {
            Side::White => to_row < from_row,
            Side::Black => to_row > from_row,
        }
    }

    pub fn owns(self, cell: Cell) -> bool {
        cell.side() == Some(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown side `{0}` (expected white or black)")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" | "whites" => Ok(Side::White),
            "black" | "b" | "blacks" => Ok(Side::Black),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Contents of one board square, numbered by its wire code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    WhiteMan = 1,
    WhiteKing = 2,
    BlackMan = 3,
    BlackKing = 4,
}

impl Cell {
    pub fn from_code(code: i64) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::WhiteMan),
            2 => Some(Cell::WhiteKing),
            3 => Some(Cell::BlackMan),
            4 => Some(Cell::BlackKing),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::WhiteMan | Cell::WhiteKing => Some(Side::White),
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, Cell::WhiteKing | Cell::BlackKing)
    }

    /// Kings folded into men; empty stays empty.
    pub fn as_man(self) -> Cell {
        match self.side() {
            Some(side) => side.man(),
            None => Cell::Empty,
        }
    }
}

/// A board coordinate. Signed so that squares just off the edge can be
/// named while generating candidates; only in-bounds squares index a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn step(self, (dr, dc): (i8, i8)) -> Square {
        Square::new(self.row + dr, self.col + dc)
    }

    /// Unit vector pointing from `self` toward `other`, per axis.
    pub fn direction_to(self, other: Square) -> (i8, i8) {
        (
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece as seen on one particular board. Derived by scanning, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub square: Square,
    pub side: Side,
    pub king: bool,
}

impl Piece {
    pub fn new(square: Square, side: Side, king: bool) -> Self {
        Self { square, side, king }
    }

    pub fn cell(&self) -> Cell {
        if self.king {
            self.side.king()
        } else {
            self.side.man()
        }
    }
}
