//! Draughts rules: move enumeration, forced-capture classification and
//! move validation.
//!
//! `RuleEngine` is stateless; every query takes the board it reasons about.
//! The turn controller and the move selector both go through it, so they
//! always agree on what is legal.

pub mod engine;
pub mod mandatory;

pub use engine::RuleEngine;
pub use mandatory::MandatoryAction;
