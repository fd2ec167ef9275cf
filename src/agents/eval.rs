//! Static position evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Piece, Player, Rank, BOARD_SIZE};

/// Material and placement weights.
///
/// A position's score is the sum of `piece_value` over the perspective
/// player's pieces minus the same sum over the opponent's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Value of a man (default: 100).
    pub man: i32,

    /// Value of a king (default: 250).
    pub king: i32,

    /// Bonus per row a man has advanced from its own back row (default: 5).
    pub advancement: i32,

    /// Added for pieces on column 0 or 7 (default: -10).
    pub edge: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            man: 100,
            king: 250,
            advancement: 5,
            edge: -10,
        }
    }
}

impl EvalWeights {
    #[must_use]
    pub fn with_man(mut self, value: i32) -> Self {
        self.man = value;
        self
    }

    #[must_use]
    pub fn with_king(mut self, value: i32) -> Self {
        self.king = value;
        self
    }

    #[must_use]
    pub fn with_advancement(mut self, value: i32) -> Self {
        self.advancement = value;
        self
    }

    #[must_use]
    pub fn with_edge(mut self, value: i32) -> Self {
        self.edge = value;
        self
    }

    /// Score of a single piece where it stands.
    #[must_use]
    pub fn piece_value(&self, coord: Coord, piece: Piece) -> i32 {
        let base = match piece.rank {
            Rank::Man => self.man + self.advancement * i32::from(rows_advanced(coord, piece.owner)),
            Rank::King => self.king,
        };
        let edge = if coord.is_edge_column() { self.edge } else { 0 };
        base + edge
    }

    /// Board score from `perspective`'s point of view.
    #[must_use]
    pub fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        board
            .occupied()
            .map(|(coord, piece)| {
                let value = self.piece_value(coord, piece);
                if piece.owner == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

/// Rows between a piece and its owner's back row.
fn rows_advanced(coord: Coord, owner: Player) -> i8 {
    let back_row = BOARD_SIZE - 1 - owner.promotion_row();
    (coord.row - back_row).abs()
}
