//! Mandatory-action classification result.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Move, Rank};

/// What a player is forced to do this move.
///
/// King captures strictly dominate man captures: while any king capture
/// exists, only king captures are listed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MandatoryAction {
    /// No capture is available; any simple move may be played.
    #[default]
    None,
    /// Every capturing move available to the player's kings.
    KingCapture(Vec<Move>),
    /// Every capturing move available to the player's men.
    ManCapture(Vec<Move>),
}

impl MandatoryAction {
    /// Tag a jump list by the rank that makes it. Empty lists mean `None`.
    #[must_use]
    pub fn captures(rank: Rank, moves: Vec<Move>) -> Self {
        if moves.is_empty() {
            return MandatoryAction::None;
        }
        match rank {
            Rank::King => MandatoryAction::KingCapture(moves),
            Rank::Man => MandatoryAction::ManCapture(moves),
        }
    }

    /// The forced moves; empty when nothing is forced.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        match self {
            MandatoryAction::None => &[],
            MandatoryAction::KingCapture(moves) | MandatoryAction::ManCapture(moves) => moves,
        }
    }

    #[must_use]
    pub fn is_forced(&self) -> bool {
        !self.moves().is_empty()
    }

    /// The listed move connecting `from` to `to`, if any.
    #[must_use]
    pub fn find(&self, from: Coord, to: Coord) -> Option<&Move> {
        self.moves().iter().find(|m| m.connects(from, to))
    }
}
