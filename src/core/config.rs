//! Game mode and participant kinds.
//!
//! The mode decides which side is driven by a human-input adapter and which
//! by the move selector; the seated agents' kinds also label the result record.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Who drives a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Human,
    Computer,
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Human => f.write_str("Human"),
            AgentKind::Computer => f.write_str("Computer"),
        }
    }
}

/// Pairing of agent kinds for a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    /// Human plays White, the computer plays Black.
    PlayerVsComputer,
    ComputerVsComputer,
}

impl GameMode {
    #[must_use]
    pub fn kind(self, player: Player) -> AgentKind {
        match (self, player) {
            (GameMode::PlayerVsPlayer, _) => AgentKind::Human,
            (GameMode::PlayerVsComputer, Player::White) => AgentKind::Human,
            (GameMode::PlayerVsComputer, Player::Black) => AgentKind::Computer,
            (GameMode::ComputerVsComputer, _) => AgentKind::Computer,
        }
    }

    /// Nobody at the board is human; an exit request comes from an observer.
    #[must_use]
    pub fn is_unattended(self) -> bool {
        matches!(self, GameMode::ComputerVsComputer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_kinds() {
        assert_eq!(GameMode::PlayerVsComputer.kind(Player::White), AgentKind::Human);
        assert_eq!(GameMode::PlayerVsComputer.kind(Player::Black), AgentKind::Computer);
        assert_eq!(GameMode::PlayerVsPlayer.kind(Player::Black), AgentKind::Human);
        assert_eq!(GameMode::default(), GameMode::PlayerVsPlayer);
    }

    #[test]
    fn test_unattended() {
        assert_eq!(AgentKind::Computer.to_string(), "Computer");
        assert!(GameMode::ComputerVsComputer.is_unattended());
        assert!(!GameMode::PlayerVsComputer.is_unattended());
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&GameMode::ComputerVsComputer).unwrap();
        let back: GameMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameMode::ComputerVsComputer);
    }
}
