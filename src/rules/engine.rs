//! Move generation and validation.
//!
//! - Men step and jump diagonally forward only; kings in all four directions.
//! - A jump passes over exactly one adjacent opponent piece onto the empty
//!   square directly behind it.
//! - A piece offers jumps if it has any, otherwise simple steps, never both.
//! - Captures are mandatory, and king captures take precedence over man
//!   captures anywhere on the board.
//! - A capture is never legal when nothing forces it.

use crate::core::{Board, Coord, IllegalMove, Move, Piece, PieceMoves, Player, Rank};

use super::mandatory::MandatoryAction;

/// Upward pair first, then downward.
static DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn directions(piece: Piece) -> &'static [(i8, i8)] {
    match piece.rank {
        Rank::King => &DIRECTIONS,
        Rank::Man if piece.owner.forward() < 0 => &DIRECTIONS[..2],
        Rank::Man => &DIRECTIONS[2..],
    }
}

/// Stateless rules for 8x8 draughts with king-priority forced capture.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// One-step diagonal moves onto empty squares.
    #[must_use]
    pub fn enumerate_simple_moves(&self, board: &Board, from: Coord) -> PieceMoves {
        let Some(piece) = board.piece_at(from) else {
            return PieceMoves::new();
        };

        directions(piece)
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|to| to.is_on_board() && board.get(*to).is_empty())
            .map(|to| Move::new(from, to, piece, false))
            .collect()
    }

    /// Single jumps over an adjacent opponent piece.
    #[must_use]
    pub fn enumerate_jumps(&self, board: &Board, from: Coord) -> PieceMoves {
        let Some(piece) = board.piece_at(from) else {
            return PieceMoves::new();
        };
        let opponent = piece.owner.opponent();

        directions(piece)
            .iter()
            .filter_map(|&(dr, dc)| {
                let over = from.offset(dr, dc);
                let to = from.offset(2 * dr, 2 * dc);
                let jumpable = to.is_on_board()
                    && board.get(to).is_empty()
                    && board.get(over).is_owned_by(opponent);
                jumpable.then(|| Move::new(from, to, piece, true))
            })
            .collect()
    }

    /// Jumps if the piece has any, otherwise its simple moves.
    #[must_use]
    pub fn enumerate_moves_for_piece(&self, board: &Board, from: Coord) -> PieceMoves {
        let jumps = self.enumerate_jumps(board, from);
        if jumps.is_empty() {
            self.enumerate_simple_moves(board, from)
        } else {
            jumps
        }
    }

    /// What `player` is forced to do on this board.
    #[must_use]
    pub fn classify_mandatory_action(&self, board: &Board, player: Player) -> MandatoryAction {
        let mut king_jumps = Vec::new();
        let mut man_jumps = Vec::new();

        for (coord, piece) in board.pieces(player) {
            let jumps = self.enumerate_jumps(board, coord);
            match piece.rank {
                Rank::King => king_jumps.extend(jumps),
                Rank::Man => man_jumps.extend(jumps),
            }
        }

        if king_jumps.is_empty() {
            MandatoryAction::captures(Rank::Man, man_jumps)
        } else {
            MandatoryAction::KingCapture(king_jumps)
        }
    }

    /// Check a proposed move for `player` and return the full `Move` if legal.
    pub fn validate_move(
        &self,
        board: &Board,
        from: Coord,
        to: Coord,
        player: Player,
    ) -> Result<Move, IllegalMove> {
        for coord in [from, to] {
            if !coord.is_on_board() {
                return Err(IllegalMove::OffBoard(coord));
            }
        }
        let piece = board.piece_at(from).ok_or(IllegalMove::EmptyOrigin(from))?;
        if piece.owner != player {
            return Err(IllegalMove::NotYourPiece(from));
        }

        let mandatory = self.classify_mandatory_action(board, player);
        let candidate = self
            .enumerate_moves_for_piece(board, from)
            .into_iter()
            .find(|m| m.connects(from, to));

        let Some(candidate) = candidate else {
            // A plain step that is only blocked by a pending capture.
            let is_step = self
                .enumerate_simple_moves(board, from)
                .iter()
                .any(|m| m.connects(from, to));
            return Err(match &mandatory {
                MandatoryAction::KingCapture(_) if is_step => IllegalMove::KingCaptureRequired,
                MandatoryAction::ManCapture(_) if is_step => IllegalMove::ManCaptureRequired,
                _ => IllegalMove::Unreachable { from, to },
            });
        };

        match &mandatory {
            MandatoryAction::None if candidate.is_capture => Err(IllegalMove::UnforcedCapture),
            MandatoryAction::None => Ok(candidate),
            MandatoryAction::KingCapture(moves) if moves.contains(&candidate) => Ok(candidate),
            MandatoryAction::KingCapture(_) => Err(IllegalMove::KingCaptureRequired),
            MandatoryAction::ManCapture(moves) if moves.contains(&candidate) => Ok(candidate),
            MandatoryAction::ManCapture(_) => Err(IllegalMove::ManCaptureRequired),
        }
    }

    /// Boolean form of [`validate_move`](Self::validate_move).
    #[must_use]
    pub fn is_valid_move(&self, board: &Board, from: Coord, to: Coord, player: Player) -> bool {
        self.validate_move(board, from, to, player).is_ok()
    }

    /// Whether `player` can make any move at all.
    #[must_use]
    pub fn has_any_legal_move(&self, board: &Board, player: Player) -> bool {
        self.classify_mandatory_action(board, player).is_forced()
            || board
                .pieces(player)
                .any(|(coord, _)| !self.enumerate_simple_moves(board, coord).is_empty())
    }

    /// Every move `validate_move` would accept for `player`.
    #[must_use]
    pub fn legal_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        match self.classify_mandatory_action(board, player) {
            MandatoryAction::None => board
                .pieces(player)
                .flat_map(|(coord, _)| self.enumerate_simple_moves(board, coord))
                .collect(),
            forced => forced.moves().to_vec(),
        }
    }
}
