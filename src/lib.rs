//! # rust-draughts
//!
//! An 8x8 draughts engine with forced captures, multi-jump chains and a
//! one-ply heuristic opponent.
//!
//! ## Rules
//!
//! - White moves first from rows 5-7 toward row 0; Black starts on rows 0-2.
//! - Men step and jump diagonally forward; kings in all four directions.
//! - Captures are mandatory. Any available king capture takes precedence
//!   over man captures.
//! - After a jump the same piece keeps jumping while it can. A man crowned
//!   mid-chain continues as a king.
//! - A player with no pieces, or no legal move, loses.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, pieces, board, moves, RNG, errors
//! - `rules`: Move enumeration, forced-capture classification, validation
//! - `turn`: Turn state machine, capture chains, end of game
//! - `agents`: `Agent` trait, heuristic move selector, line-based human input
//! - `session`: Match loop, turn limits and the result log
//!
//! ```
//! use rust_draughts::{Coord, TurnController, TurnState, Player};
//!
//! let mut game = TurnController::new();
//! let outcome = game.submit_move(Coord::new(5, 0), Coord::new(4, 1)).unwrap();
//! assert_eq!(outcome.state, TurnState::AwaitingMove { player: Player::Black });
//! ```

pub mod core;
pub mod rules;
pub mod turn;
pub mod agents;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng,
    Coord, Cell, Piece, Rank, Board, Move, MoveRecord,
    AgentKind, GameMode,
    BoardError, IllegalMove, ParseCoordError, RecordError,
};

pub use crate::rules::{MandatoryAction, RuleEngine};

pub use crate::turn::{EndReason, GameStats, GameSummary, MoveOutcome, TurnController, TurnState};

pub use crate::agents::{
    Agent, MoveIntent, TurnContext,
    EvalWeights, MoveSelector, SelectorConfig, ThinkDelay,
    HumanAgent,
};

pub use crate::session::{Match, MatchConfig, MatchEvent, ResultLog};
