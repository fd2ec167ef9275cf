//! Move-choosing participants.
//!
//! - [`MoveSelector`]: one-ply greedy search over [`EvalWeights`]
//! - [`HumanAgent`]: parses typed commands from a reader

pub mod agent;
pub mod eval;
pub mod human;
pub mod selector;

pub use agent::{Agent, MoveIntent, TurnContext};
pub use eval::EvalWeights;
pub use human::{parse_intent, HumanAgent};
pub use selector::{MoveSelector, SelectorConfig, ThinkDelay};
