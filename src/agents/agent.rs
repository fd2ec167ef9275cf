//! The seam between the turn controller and whoever chooses moves.

use crate::core::{AgentKind, Board, Coord, Player};
use crate::rules::MandatoryAction;

/// What an agent wants to do on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveIntent {
    /// Play the piece on `from` to `to`.
    Move { from: Coord, to: Coord },
    /// Leave the game.
    Exit,
    /// Show statistics, then ask again.
    ShowStats,
    /// Input that could not be understood.
    Malformed(String),
    /// The agent has nothing to offer.
    NoMove,
}

/// Everything an agent may look at when choosing a move.
#[derive(Clone, Debug)]
pub struct TurnContext<'a> {
    pub board: &'a Board,
    pub player: Player,
    pub turn: u32,
    /// Forced captures, already narrowed to the chaining piece mid-chain.
    pub mandatory: MandatoryAction,
    /// The piece that must keep jumping, if any.
    pub forced: Option<Coord>,
}

/// A participant: human-input adapter or automated selector.
pub trait Agent {
    fn kind(&self) -> AgentKind;

    /// Decide what to do for `ctx.player`.
    fn choose_move(&mut self, ctx: &TurnContext<'_>) -> MoveIntent;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn kind(&self) -> AgentKind {
        (**self).kind()
    }

    fn choose_move(&mut self, ctx: &TurnContext<'_>) -> MoveIntent {
        (**self).choose_move(ctx)
    }
}
