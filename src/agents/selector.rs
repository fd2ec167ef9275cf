//! One-ply greedy move selection.
//!
//! Every candidate is applied to a copy of the board and scored with
//! [`EvalWeights::evaluate`]. The best score wins; equal scores replace the
//! incumbent on a fair coin flip, so ties are broken by the agent's RNG.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{AgentKind, Board, GameRng, Move, Player};
use crate::rules::{MandatoryAction, RuleEngine};

use super::agent::{Agent, MoveIntent, TurnContext};
use super::eval::EvalWeights;

/// Pause before answering, in milliseconds, drawn uniformly per move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self {
            min_ms: 200,
            max_ms: 800,
        }
    }
}

/// Move selector configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub weights: EvalWeights,

    /// No pause when `None`.
    pub think_delay: Option<ThinkDelay>,
}

impl SelectorConfig {
    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_think_delay(mut self, delay: ThinkDelay) -> Self {
        self.think_delay = Some(delay);
        self
    }
}

/// Automated agent.
#[derive(Clone, Debug)]
pub struct MoveSelector {
    rules: RuleEngine,
    config: SelectorConfig,
    rng: GameRng,
}

impl MoveSelector {
    #[must_use]
    pub fn new(config: SelectorConfig, rng: GameRng) -> Self {
        Self {
            rules: RuleEngine::new(),
            config,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Forced moves if any, otherwise every simple move of `player`.
    #[must_use]
    pub fn candidates(&self, board: &Board, player: Player, mandatory: &MandatoryAction) -> Vec<Move> {
        if mandatory.is_forced() {
            return mandatory.moves().to_vec();
        }
        board
            .pieces(player)
            .flat_map(|(coord, _)| self.rules.enumerate_simple_moves(board, coord))
            .collect()
    }

    /// Highest-scoring candidate, or `None` when there is nothing to play.
    pub fn select(&mut self, board: &Board, player: Player, mandatory: &MandatoryAction) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;

        for mv in self.candidates(board, player, mandatory) {
            let next = match board.with_move(&mv) {
                Ok(next) => next,
                Err(err) => {
                    warn!(%mv, %err, "skipping candidate that cannot be simulated");
                    continue;
                }
            };
            let score = self.config.weights.evaluate(&next, player);
            trace!(%mv, score, "candidate");

            best = match best {
                None => Some((mv, score)),
                Some((_, top)) if score > top => Some((mv, score)),
                Some((_, top)) if score == top && self.rng.coin_flip() => Some((mv, score)),
                keep => keep,
            };
        }

        if let Some((mv, score)) = best {
            debug!(%player, %mv, score, "selected move");
        }
        best.map(|(mv, _)| mv)
    }

    fn think(&mut self) {
        if let Some(ThinkDelay { min_ms, max_ms }) = self.config.think_delay {
            let ms = self.rng.gen_range_u64(min_ms.min(max_ms)..=max_ms.max(min_ms));
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}

impl Agent for MoveSelector {
    fn kind(&self) -> AgentKind {
        AgentKind::Computer
    }

    fn choose_move(&mut self, ctx: &TurnContext<'_>) -> MoveIntent {
        match self.select(ctx.board, ctx.player, &ctx.mandatory) {
            Some(mv) => {
                self.think();
                MoveIntent::Move {
                    from: mv.from,
                    to: mv.to,
                }
            }
            None => MoveIntent::NoMove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    fn selector(seed: u64) -> MoveSelector {
        MoveSelector::new(SelectorConfig::default(), GameRng::new(seed))
    }

    fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).unwrap()
    }

    #[test]
    fn test_takes_forced_capture() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . w . . . w .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let rules = RuleEngine::new();
        let mandatory = rules.classify_mandatory_action(&b, Player::White);

        let mv = selector(1).select(&b, Player::White, &mandatory).unwrap();
        assert_eq!((mv.from, mv.to), (Coord::new(5, 2), Coord::new(3, 4)));
    }

    #[test]
    fn test_prefers_crowning() {
        let b = board(
            "
            . . . . . . . .
            . . w . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . w .
            . . . . . . . .
            . . b . . . . .
            ",
        );
        let mv = selector(7).select(&b, Player::White, &MandatoryAction::None).unwrap();
        assert_eq!(mv.from, Coord::new(1, 2));
    }

    #[test]
    fn test_avoids_edge() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . w . . . . . .
            . . . . . . . .
            ",
        );
        // (5,0) costs the edge penalty, (5,2) does not.
        for seed in 0..16 {
            let mv = selector(seed).select(&b, Player::White, &MandatoryAction::None).unwrap();
            assert_eq!(mv.to, Coord::new(5, 2));
        }
    }

    #[test]
    fn test_no_candidates() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . b . . . . .
            . b . . . . . .
            w . . . . . . .
            ",
        );
        let mut s = selector(3);
        assert!(s.candidates(&b, Player::White, &MandatoryAction::None).is_empty());
        assert_eq!(s.select(&b, Player::White, &MandatoryAction::None), None);

        let ctx = TurnContext {
            board: &b,
            player: Player::White,
            turn: 9,
            mandatory: MandatoryAction::None,
            forced: None,
        };
        assert_eq!(s.choose_move(&ctx), MoveIntent::NoMove);
    }

    #[test]
    fn test_no_pause_without_a_move() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . b . . . . .
            . b . . . . . .
            w . . . . . . .
            ",
        );
        let slow = SelectorConfig::default().with_think_delay(ThinkDelay {
            min_ms: 5_000,
            max_ms: 5_000,
        });
        let mut s = MoveSelector::new(slow, GameRng::new(3));
        let ctx = TurnContext {
            board: &b,
            player: Player::White,
            turn: 9,
            mandatory: MandatoryAction::None,
            forced: None,
        };

        let started = std::time::Instant::now();
        assert_eq!(s.choose_move(&ctx), MoveIntent::NoMove);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let b = Board::standard();
        let picks = |seed| {
            let mut s = selector(seed);
            (0..10)
                .map(|_| s.select(&b, Player::Black, &MandatoryAction::None).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(99), picks(99));
    }

    #[test]
    fn test_ties_use_both_options() {
        // Both steps of a lone central man score the same.
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . . . . .
            ",
        );
        let mut s = selector(5);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..64 {
            seen.insert(s.select(&b, Player::Black, &MandatoryAction::None).unwrap().to);
        }
        assert_eq!(seen.len(), 2);
    }
}
