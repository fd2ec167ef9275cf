//! Board coordinates and algebraic notation.
//!
//! Row 0 is the top of the board (rank "8"), column 0 is file "a".
//! Coordinates are signed so neighbour arithmetic can step off the board;
//! `is_on_board` tells the two apart.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, col) pair, possibly off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Both components lie in `[0, 8)`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Dark square: on the board with odd `row + col`.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 != 0
    }

    /// The coordinate `(dr, dc)` away from this one.
    #[must_use]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Square halfway between two coordinates two diagonal steps apart.
    #[must_use]
    pub const fn midpoint(self, other: Coord) -> Self {
        Self {
            row: self.row + (other.row - self.row) / 2,
            col: self.col + (other.col - self.col) / 2,
        }
    }

    /// Column 0 or column 7.
    #[must_use]
    pub const fn is_edge_column(self) -> bool {
        self.col == 0 || self.col == BOARD_SIZE - 1
    }

    /// Iterate over all 32 playable squares, row-major.
    pub fn playable() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
            .filter(|c| c.is_playable())
    }

    /// Parse algebraic notation such as `"a3"` or `"H8"`.
    #[must_use]
    pub fn parse_algebraic(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Self {
            row: BOARD_SIZE - (rank - b'0') as i8,
            col: (file - b'a') as i8,
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_on_board() {
            return f.write_str("??");
        }
        let file = (b'A' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl std::str::FromStr for Coord {
    type Err = crate::core::error::ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_algebraic(s).ok_or_else(|| crate::core::error::ParseCoordError(s.to_string()))
    }
}
