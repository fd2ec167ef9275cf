//! Core types: players, coordinates, pieces, the board, moves, RNG, errors.
//!
//! Everything here is rule-agnostic plumbing; legality lives in `rules`.

pub mod player;
pub mod rng;
pub mod coord;
pub mod piece;
pub mod board;
pub mod moves;
pub mod config;
pub mod error;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use coord::{Coord, BOARD_SIZE};
pub use piece::{Cell, Piece, Rank};
pub use board::{Applied, Board};
pub use moves::{Move, MoveRecord, PieceMoves};
pub use config::{AgentKind, GameMode};
pub use error::{BoardError, IllegalMove, ParseCoordError, RecordError};
