//! Move values and move history records.
//!
//! A `Move` is produced by the rule engine and never mutated afterwards.
//! `MoveRecord` is what the turn controller keeps for accepted moves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;
use super::piece::Piece;
use super::player::Player;

/// Moves available to one piece. A piece has at most four.
pub type PieceMoves = SmallVec<[Move; 4]>;

/// A single step or single jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    /// The piece as it stood on `from`.
    pub piece: Piece,
    /// Jumps over an opponent piece.
    pub is_capture: bool,
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord, piece: Piece, is_capture: bool) -> Self {
        Self {
            from,
            to,
            piece,
            is_capture,
        }
    }

    /// The acting player.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.piece.owner
    }

    /// Square of the jumped piece, for captures.
    #[must_use]
    pub fn captured_square(&self) -> Option<Coord> {
        self.is_capture.then(|| self.from.midpoint(self.to))
    }

    /// Same origin and destination.
    #[must_use]
    pub fn connects(&self, from: Coord, to: Coord) -> bool {
        self.from == from && self.to == to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// An accepted move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,

    /// Turn number when the move was played.
    pub turn: u32,

    /// Position within the turn; greater than zero for chained jumps.
    pub sequence: u32,

    /// Piece removed by this move.
    pub captured: Option<Piece>,

    /// The moving man was crowned.
    pub promoted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation() {
        let piece = Piece::man(Player::White);
        let step = Move::new(Coord::new(5, 0), Coord::new(4, 1), piece, false);
        let jump = Move::new(Coord::new(5, 2), Coord::new(3, 4), piece, true);

        assert_eq!(step.to_string(), "A3-B4");
        assert_eq!(jump.to_string(), "C3xE5");
        assert_eq!(step.player(), Player::White);
    }

    #[test]
    fn test_captured_square() {
        let piece = Piece::king(Player::Black);
        let jump = Move::new(Coord::new(2, 5), Coord::new(4, 3), piece, true);
        let step = Move::new(Coord::new(2, 5), Coord::new(3, 4), piece, false);

        assert_eq!(jump.captured_square(), Some(Coord::new(3, 4)));
        assert_eq!(step.captured_square(), None);
        assert!(jump.connects(Coord::new(2, 5), Coord::new(4, 3)));
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(Coord::new(5, 2), Coord::new(3, 4), Piece::man(Player::White), true);
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
