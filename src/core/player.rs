//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of a draughts game. `White` moves first, starts on the
//! bottom three rows and promotes on row 0; `Black` starts on the top three
//! rows and promotes on row 7.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for counters and
//! per-side statistics.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; advances toward row 0.
    White,
    /// Moves second; advances toward row 7.
    Black,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Get the raw player index (0 for White, 1 for Black).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a forward step for this player's men.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// The row on which this player's men are crowned.
    #[must_use]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_draughts::core::{Player, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::with_value(0);
/// captures[Player::Black] += 2;
///
/// assert_eq!(captures[Player::White], 0);
/// assert_eq!(captures[Player::Black], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::White), factory(Player::Black)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
