//! The turn state machine.
//!
//! ```text
//! AwaitingMove(p) --simple move / final jump--> AwaitingMove(opponent)
//! AwaitingMove(p) --jump with follow-up------> CaptureContinuation(p, landing)
//! CaptureContinuation(p, sq) --jump from sq--> CaptureContinuation | AwaitingMove(opponent)
//! any --opponent wiped out / blocked, exit, draw--> GameOver
//! ```
//!
//! Rejected input never changes state.

use im::Vector;
use tracing::{debug, info};

use crate::agents::{Agent, MoveIntent, TurnContext};
use crate::core::{Board, Coord, IllegalMove, Move, MoveRecord, Player, PlayerMap};
use crate::rules::{MandatoryAction, RuleEngine};

use super::state::{EndReason, GameStats, GameSummary, MoveOutcome, TurnState};

/// Owns the board for one game and enforces turn order.
#[derive(Clone, Debug)]
pub struct TurnController {
    board: Board,
    rules: RuleEngine,
    state: TurnState,
    /// Starts at 1; increments when play passes to the opponent.
    turn: u32,
    /// Jumps already made in the current capture chain.
    sequence: u32,
    captures: PlayerMap<u32>,
    history: Vector<MoveRecord>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Standard opening position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Player::White)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn with_board(board: Board, first: Player) -> Self {
        Self {
            board,
            rules: RuleEngine::new(),
            state: TurnState::AwaitingMove { player: first },
            turn: 1,
            sequence: 0,
            captures: PlayerMap::default(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        self.state.player_to_move()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Opponent pieces captured by each player so far.
    #[must_use]
    pub fn captures(&self) -> &PlayerMap<u32> {
        &self.captures
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|r| &r.mv)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// What the player to move is forced to do.
    ///
    /// During a capture chain only the forced piece's jumps are listed.
    #[must_use]
    pub fn mandatory_context(&self) -> MandatoryAction {
        match self.state {
            TurnState::AwaitingMove { player } => self.rules.classify_mandatory_action(&self.board, player),
            TurnState::CaptureContinuation { forced, .. } => match self.board.piece_at(forced) {
                Some(piece) => {
                    MandatoryAction::captures(piece.rank, self.rules.enumerate_jumps(&self.board, forced).to_vec())
                }
                None => MandatoryAction::None,
            },
            TurnState::GameOver { .. } => MandatoryAction::None,
        }
    }

    /// Build the context for the player to move and ask `agent` for input.
    ///
    /// Returns `MoveIntent::NoMove` once the game is over.
    pub fn request_move_from_agent(&self, agent: &mut dyn Agent) -> MoveIntent {
        let Some(player) = self.current_player() else {
            return MoveIntent::NoMove;
        };
        let ctx = TurnContext {
            board: &self.board,
            player,
            turn: self.turn,
            mandatory: self.mandatory_context(),
            forced: self.state.forced_piece(),
        };
        agent.choose_move(&ctx)
    }

    /// Validate and play a move for the player to move.
    pub fn submit_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, IllegalMove> {
        let result = self.resolve(from, to);
        let (player, mv) = match result {
            Ok(found) => found,
            Err(err) => {
                debug!(%from, %to, %err, "move rejected");
                return Err(err);
            }
        };

        let applied = self.board.apply_move(&mv)?;
        if applied.captured.is_some() {
            self.captures[player] += 1;
        }

        let record = MoveRecord {
            mv,
            turn: self.turn,
            sequence: self.sequence,
            captured: applied.captured.map(|(_, piece)| piece),
            promoted: applied.promoted,
        };
        self.history.push_back(record.clone());
        debug!(%mv, turn = self.turn, promoted = applied.promoted, "move played");

        self.state = self.next_state(player, &mv);
        if let TurnState::GameOver { winner, reason } = self.state {
            info!(?winner, ?reason, turn = self.turn, "game over");
        }

        Ok(MoveOutcome {
            record,
            state: self.state,
        })
    }

    fn resolve(&self, from: Coord, to: Coord) -> Result<(Player, Move), IllegalMove> {
        match self.state {
            TurnState::GameOver { .. } => Err(IllegalMove::GameOver),
            TurnState::CaptureContinuation { player, forced } => {
                if from != forced {
                    return Err(IllegalMove::WrongPiece { forced });
                }
                let mv = self
                    .mandatory_context()
                    .find(from, to)
                    .copied()
                    .ok_or(IllegalMove::NotAJump { forced })?;
                Ok((player, mv))
            }
            TurnState::AwaitingMove { player } => {
                let mv = self.rules.validate_move(&self.board, from, to, player)?;
                Ok((player, mv))
            }
        }
    }

    fn next_state(&mut self, player: Player, mv: &Move) -> TurnState {
        // Promotion has already been applied, so a freshly crowned king
        // continues with king geometry.
        if mv.is_capture && !self.rules.enumerate_jumps(&self.board, mv.to).is_empty() {
            self.sequence += 1;
            return TurnState::CaptureContinuation { player, forced: mv.to };
        }

        self.sequence = 0;
        let opponent = player.opponent();
        if self.board.piece_count(opponent) == 0 {
            return TurnState::GameOver {
                winner: Some(player),
                reason: EndReason::NoPieces,
            };
        }
        if !self.rules.has_any_legal_move(&self.board, opponent) {
            return TurnState::GameOver {
                winner: Some(player),
                reason: EndReason::NoMoves,
            };
        }

        self.turn += 1;
        TurnState::AwaitingMove { player: opponent }
    }

    fn finish(&mut self, winner: Option<Player>, reason: EndReason) -> Result<TurnState, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        self.state = TurnState::GameOver { winner, reason };
        info!(?winner, ?reason, turn = self.turn, "game over");
        Ok(self.state)
    }

    /// The player to move leaves; the opponent wins.
    pub fn resign(&mut self) -> Result<TurnState, IllegalMove> {
        let player = self.current_player().ok_or(IllegalMove::GameOver)?;
        self.finish(Some(player.opponent()), EndReason::PlayerExit)
    }

    /// The player to move cannot produce a move; the opponent wins.
    pub fn forfeit(&mut self) -> Result<TurnState, IllegalMove> {
        let player = self.current_player().ok_or(IllegalMove::GameOver)?;
        self.finish(Some(player.opponent()), EndReason::NoMoves)
    }

    /// Stop the game with no winner, e.g. an observer quitting an
    /// unattended match.
    pub fn abandon(&mut self) -> Result<TurnState, IllegalMove> {
        self.finish(None, EndReason::PlayerExit)
    }

    /// End the game as a draw.
    pub fn declare_draw(&mut self) -> Result<TurnState, IllegalMove> {
        self.finish(None, EndReason::Draw)
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            turn: self.turn,
            pieces: PlayerMap::new(|p| self.board.piece_count(p)),
            kings: PlayerMap::new(|p| self.board.king_count(p)),
            captures: self.captures,
        }
    }

    /// Summary of a finished game; `None` while play continues.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        match self.state {
            TurnState::GameOver { winner, reason } => Some(GameSummary {
                winner,
                reason,
                turns: self.turn,
                captures: self.captures,
            }),
            _ => None,
        }
    }
}
