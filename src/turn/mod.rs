//! Turn sequencing: whose move it is, capture chains and game end.

pub mod controller;
pub mod state;

pub use controller::TurnController;
pub use state::{EndReason, GameStats, GameSummary, MoveOutcome, TurnState};
