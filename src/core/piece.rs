//! Pieces and board cells.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Man or King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves and captures diagonally forward only.
    Man,
    /// Moves and captures diagonally in all four directions.
    King,
}

impl Rank {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Rank::Man => 0,
            Rank::King => 1,
        }
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn new(owner: Player, rank: Rank) -> Self {
        Self { owner, rank }
    }

    #[must_use]
    pub const fn man(owner: Player) -> Self {
        Self::new(owner, Rank::Man)
    }

    #[must_use]
    pub const fn king(owner: Player) -> Self {
        Self::new(owner, Rank::King)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// The same piece after crowning.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Diagram symbol: `w`/`W` for White, `b`/`B` for Black, upper case for kings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.owner, self.rank) {
            (Player::White, Rank::Man) => 'w',
            (Player::White, Rank::King) => 'W',
            (Player::Black, Rank::Man) => 'b',
            (Player::Black, Rank::King) => 'B',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Self::man(Player::White)),
            'W' => Some(Self::king(Player::White)),
            'b' => Some(Self::man(Player::Black)),
            'B' => Some(Self::king(Player::Black)),
            _ => None,
        }
    }
}

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Occupied by a piece belonging to `player`.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        matches!(self, Cell::Occupied(p) if p.owner == player)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for owner in Player::all() {
            for piece in [Piece::man(owner), Piece::king(owner)] {
                assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
            }
        }
        assert_eq!(Piece::from_symbol('.'), None);
    }

    #[test]
    fn test_crowned() {
        let man = Piece::man(Player::Black);
        assert!(!man.is_king());
        assert_eq!(man.crowned(), Piece::king(Player::Black));
        assert_eq!(man.crowned().crowned(), Piece::king(Player::Black));
    }

    #[test]
    fn test_cell_ownership() {
        let cell = Cell::from(Piece::man(Player::White));
        assert!(cell.is_owned_by(Player::White));
        assert!(!cell.is_owned_by(Player::Black));
        assert!(!Cell::Empty.is_owned_by(Player::White));
        assert_eq!(Cell::default(), Cell::Empty);
    }
}
