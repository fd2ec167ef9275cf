//! Turn states, end reasons and game summaries.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Move, MoveRecord, Player, PlayerMap};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser has no pieces left.
    NoPieces,
    /// The loser has pieces but no legal move.
    NoMoves,
    /// A player resigned, or an observer stopped the game.
    PlayerExit,
    /// Stopped without a winner, e.g. by a turn limit.
    Draw,
}

/// Position of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// `player` may make any legal move.
    AwaitingMove { player: Player },
    /// `player` must jump again with the piece on `forced`.
    CaptureContinuation { player: Player, forced: Coord },
    /// Terminal.
    GameOver {
        winner: Option<Player>,
        reason: EndReason,
    },
}

impl TurnState {
    /// The player expected to act, if the game is still running.
    #[must_use]
    pub fn player_to_move(&self) -> Option<Player> {
        match *self {
            TurnState::AwaitingMove { player } | TurnState::CaptureContinuation { player, .. } => Some(player),
            TurnState::GameOver { .. } => None,
        }
    }

    /// The piece that must keep jumping.
    #[must_use]
    pub fn forced_piece(&self) -> Option<Coord> {
        match *self {
            TurnState::CaptureContinuation { forced, .. } => Some(forced),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::GameOver { .. })
    }
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// State after the move.
    pub state: TurnState,
}

impl MoveOutcome {
    #[must_use]
    pub fn mv(&self) -> &Move {
        &self.record.mv
    }
}

/// Live statistics, e.g. for a stats screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub turn: u32,
    pub pieces: PlayerMap<u32>,
    pub kings: PlayerMap<u32>,
    /// Opponent pieces captured by each player.
    pub captures: PlayerMap<u32>,
}

/// End-of-game summary handed to the result log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: Option<Player>,
    pub reason: EndReason,
    /// Turn counter when the game ended.
    pub turns: u32,
    pub captures: PlayerMap<u32>,
}

impl GameSummary {
    #[must_use]
    pub fn loser(&self) -> Option<Player> {
        self.winner.map(Player::opponent)
    }

    /// Captures by the winner, or by White when there is no winner.
    #[must_use]
    pub fn winner_captures(&self) -> u32 {
        self.captures[self.winner.unwrap_or(Player::White)]
    }

    /// Captures by the loser, or by Black when there is no winner.
    #[must_use]
    pub fn loser_captures(&self) -> u32 {
        self.captures[self.loser().unwrap_or(Player::Black)]
    }

    /// Human-readable end reason.
    #[must_use]
    pub fn reason_text(&self) -> String {
        match (self.reason, self.loser()) {
            (EndReason::NoPieces, Some(loser)) => format!("{loser} ran out of pieces"),
            (EndReason::NoMoves, Some(loser)) => format!("{loser} has no legal moves"),
            (EndReason::PlayerExit, Some(loser)) => format!("{loser} left the game"),
            (EndReason::PlayerExit, None) => "the observer stopped the game".to_string(),
            (EndReason::Draw, _) => "draw by turn limit".to_string(),
            (_, None) => "game ended without a winner".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_to_move() {
        let awaiting = TurnState::AwaitingMove { player: Player::Black };
        let chain = TurnState::CaptureContinuation {
            player: Player::White,
            forced: Coord::new(3, 4),
        };
        let over = TurnState::GameOver {
            winner: Some(Player::White),
            reason: EndReason::NoPieces,
        };

        assert_eq!(awaiting.player_to_move(), Some(Player::Black));
        assert_eq!(chain.player_to_move(), Some(Player::White));
        assert_eq!(chain.forced_piece(), Some(Coord::new(3, 4)));
        assert_eq!(over.player_to_move(), None);
        assert!(over.is_terminal());
        assert!(!awaiting.is_terminal());
    }

    #[test]
    fn test_summary_captures_by_role() {
        let summary = GameSummary {
            winner: Some(Player::Black),
            reason: EndReason::NoMoves,
            turns: 40,
            captures: PlayerMap::new(|p| if p == Player::White { 3 } else { 9 }),
        };

        assert_eq!(summary.loser(), Some(Player::White));
        assert_eq!(summary.winner_captures(), 9);
        assert_eq!(summary.loser_captures(), 3);
        assert_eq!(summary.reason_text(), "White has no legal moves");
    }

    #[test]
    fn test_summary_without_winner() {
        let summary = GameSummary {
            winner: None,
            reason: EndReason::PlayerExit,
            turns: 5,
            captures: PlayerMap::new(|p| p.index() as u32 + 1),
        };

        assert_eq!(summary.winner_captures(), 1);
        assert_eq!(summary.loser_captures(), 2);
        assert_eq!(summary.reason_text(), "the observer stopped the game");
    }
}
