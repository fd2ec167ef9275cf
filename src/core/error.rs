//! Error types for board access, move validation and result logging.
//!
//! Illegal moves are recoverable: the turn controller stays where it was and
//! the caller re-prompts. `BoardError::OutOfRange` on a write is a coordinate
//! defect upstream of the rule engine.

use super::coord::Coord;

/// Errors raised by `Board` mutators and fixture parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A write addressed a square outside the 8x8 grid.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfRange { row: i8, col: i8 },

    /// A board diagram could not be parsed.
    #[error("bad board diagram: {0}")]
    BadDiagram(String),
}

impl BoardError {
    pub(crate) fn out_of_range(coord: Coord) -> Self {
        BoardError::OutOfRange {
            row: coord.row,
            col: coord.col,
        }
    }
}

/// Reasons a proposed move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("{0} is not on the board")]
    OffBoard(Coord),

    #[error("no piece on {0}")]
    EmptyOrigin(Coord),

    #[error("the piece on {0} belongs to the opponent")]
    NotYourPiece(Coord),

    #[error("the piece on {from} cannot reach {to}")]
    Unreachable { from: Coord, to: Coord },

    #[error("a king capture is available and must be taken")]
    KingCaptureRequired,

    #[error("a capture with a man is available and must be taken")]
    ManCaptureRequired,

    #[error("captures are only allowed when forced")]
    UnforcedCapture,

    #[error("the capture must continue with the piece on {forced}")]
    WrongPiece { forced: Coord },

    #[error("the piece on {forced} must jump again")]
    NotAJump { forced: Coord },

    #[error("the game is over")]
    GameOver,

    /// A validated move could not be written to the board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Failure to parse an algebraic coordinate such as `"c3"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square `{0}`, expected a file a-h followed by a rank 1-8")]
pub struct ParseCoordError(pub String);

/// Failures of the append-only result log.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("result log I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
