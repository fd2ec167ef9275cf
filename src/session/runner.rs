//! Match loop: asks agents for moves and feeds them to the controller.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::agents::{Agent, MoveIntent, MoveSelector, SelectorConfig};
use crate::core::{AgentKind, GameMode, GameRng, IllegalMove, Player, RecordError};
use crate::turn::{GameStats, GameSummary, MoveOutcome, TurnController, TurnState};

use super::record::ResultLog;

/// Configuration for a match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Which sides are human.
    pub mode: GameMode,

    /// Seed for the automated players. Entropy when `None`.
    pub seed: Option<u64>,

    /// Turn limit before a draw is declared (0 = unlimited).
    pub max_turns: u32,

    /// Append a result line here when the match ends.
    pub result_log: Option<PathBuf>,

    /// Settings shared by both automated players.
    pub selector: SelectorConfig,
}

impl MatchConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_result_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.result_log = Some(path.into());
        self
    }

    pub fn with_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }
}

/// What a single [`Match::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    Played(MoveOutcome),
    /// A human proposed an illegal move; they will be asked again.
    Rejected { player: Player, error: IllegalMove },
    /// A human typed something unparseable.
    Malformed { player: Player, input: String },
    StatsRequested(GameStats),
    Finished(GameSummary),
}

/// One game between two agents.
pub struct Match {
    controller: TurnController,
    white: Box<dyn Agent>,
    black: Box<dyn Agent>,
    config: MatchConfig,
}

impl Match {
    pub fn new(config: MatchConfig, white: Box<dyn Agent>, black: Box<dyn Agent>) -> Self {
        Self {
            controller: TurnController::new(),
            white,
            black,
            config,
        }
    }

    /// Build agents from `config.mode`: `human` supplies the human side(s),
    /// automated sides get a [`MoveSelector`] on a forked RNG stream.
    pub fn from_config(config: MatchConfig, mut human: impl FnMut(Player) -> Box<dyn Agent>) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut agent_for = |player: Player| -> Box<dyn Agent> {
            match config.mode.kind(player) {
                AgentKind::Human => human(player),
                AgentKind::Computer => Box::new(MoveSelector::new(config.selector.clone(), rng.fork())),
            }
        };
        let white = agent_for(Player::White);
        let black = agent_for(Player::Black);
        Self::new(config, white, black)
    }

    /// Replace the controller, e.g. to start from a custom position.
    #[must_use]
    pub fn with_controller(mut self, controller: TurnController) -> Self {
        self.controller = controller;
        self
    }

    #[must_use]
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// `"Human vs Computer"` style label from the seated agents.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} vs {}", self.white.kind(), self.black.kind())
    }

    /// Stop from outside the game loop. With nobody human at the board the
    /// game ends without a winner; otherwise the player to move resigns.
    pub fn stop(&mut self) -> Option<GameSummary> {
        let stopped = if self.config.mode.is_unattended() {
            self.controller.abandon()
        } else {
            self.controller.resign()
        };
        if let Err(err) = stopped {
            warn!(%err, "stop requested on a finished game");
        }
        self.controller.summary()
    }

    /// Ask the agent to move once and apply its answer.
    pub fn step(&mut self) -> MatchEvent {
        if let Some(summary) = self.controller.summary() {
            return MatchEvent::Finished(summary);
        }
        if self.config.max_turns > 0 && self.controller.turn_number() > self.config.max_turns {
            info!(max_turns = self.config.max_turns, "turn limit reached");
            return self.end(TurnController::declare_draw);
        }

        let Some(player) = self.controller.current_player() else {
            return self.end(TurnController::declare_draw);
        };
        let agent = match player {
            Player::White => &mut self.white,
            Player::Black => &mut self.black,
        };
        let automated = agent.kind() == AgentKind::Computer;
        let intent = self.controller.request_move_from_agent(agent.as_mut());

        match intent {
            MoveIntent::Move { from, to } => match self.controller.submit_move(from, to) {
                Ok(outcome) => MatchEvent::Played(outcome),
                Err(error) if automated => {
                    warn!(%player, %from, %to, %error, "automated player proposed an illegal move");
                    self.end(TurnController::forfeit)
                }
                Err(error) => MatchEvent::Rejected { player, error },
            },
            MoveIntent::Exit => self.end(TurnController::resign),
            MoveIntent::ShowStats => {
                let stats = self.controller.stats();
                info!(?stats, "stats requested");
                MatchEvent::StatsRequested(stats)
            }
            MoveIntent::Malformed(input) if !automated => MatchEvent::Malformed { player, input },
            MoveIntent::Malformed(_) | MoveIntent::NoMove => {
                warn!(%player, "player produced no move");
                self.end(TurnController::forfeit)
            }
        }
    }

    fn end(
        &mut self,
        finish: impl FnOnce(&mut TurnController) -> Result<TurnState, IllegalMove>,
    ) -> MatchEvent {
        if let Err(err) = finish(&mut self.controller) {
            warn!(%err, "could not end the game");
        }
        self.step()
    }

    /// Play to the end, then append to the result log if one is configured.
    pub fn run(&mut self) -> Result<GameSummary, RecordError> {
        let summary = loop {
            if let MatchEvent::Finished(summary) = self.step() {
                break summary;
            }
        };
        info!(
            winner = ?summary.winner,
            reason = %summary.reason_text(),
            turns = summary.turns,
            "match finished"
        );

        if let Some(path) = &self.config.result_log {
            ResultLog::new(path).append(&summary, &self.label())?;
        }
        Ok(summary)
    }
}
