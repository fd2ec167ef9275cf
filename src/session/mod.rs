//! Running matches and recording their results.

pub mod record;
pub mod runner;

pub use record::{ResultLog, DEFAULT_LOG_FILE};
pub use runner::{Match, MatchConfig, MatchEvent};
