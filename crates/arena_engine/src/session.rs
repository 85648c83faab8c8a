//! Local two-player session management.
//!
//! [`LocalGame`] wraps any [`GameEngine`] and adds what the rules leave out:
//! whose turn it is, refusing moves once the game is decided, a move history,
//! and undo. Undo rebuilds the session by replaying the remaining history
//! from a fresh starting board, because engines expose no inverse move.

use crate::engine::{GameEngine, Outcome, Player};
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument, warn};

/// One applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRecord<M> {
    /// Who moved.
    pub player: Player,
    /// The move as submitted.
    pub mv: M,
    /// When the move was accepted.
    pub timestamp: DateTime<Utc>,
}

/// Session-owned snapshot: board, turn, result and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState<S, M> {
    board_state: S,
    current_player: Player,
    winner: Option<Outcome>,
    move_history: Vec<MoveRecord<M>>,
}

impl<S, M> GameState<S, M> {
    /// Starting snapshot: `board_state`, player A to move, no result, no history.
    pub fn new(board_state: S) -> Self {
        Self {
            board_state,
            current_player: Player::A,
            winner: None,
            move_history: Vec::new(),
        }
    }

    /// Returns the engine board.
    pub fn board_state(&self) -> &S {
        &self.board_state
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the result, `None` while the game is open.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Returns every accepted move, oldest first.
    pub fn move_history(&self) -> &[MoveRecord<M>] {
        &self.move_history
    }
}

/// Error raised by a session operation.
///
/// `NotYourTurn` and `GameComplete` come from turn orchestration;
/// `InvalidMove` wraps whatever the engine rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The acting player does not hold the turn.
    #[display("It's not player {}'s turn", _0)]
    NotYourTurn(Player),

    /// A winner or draw has already been recorded.
    #[display("Game is already complete")]
    GameComplete,

    /// The engine rejected the move. Carries the engine's message.
    #[display("{}", _0)]
    InvalidMove(String),

    /// A history entry could not be re-applied.
    #[display("History entry {} failed to replay: {}", index, message)]
    Replay {
        /// Position of the entry in the history.
        index: usize,
        /// The engine's message.
        message: String,
    },
}

impl std::error::Error for SessionError {}

/// A single local play-through of one engine.
///
/// The session is the only writer of its [`GameState`]. Every operation
/// either replaces the state wholesale or leaves it untouched.
#[derive(Debug, Clone)]
pub struct LocalGame<S, M, E> {
    engine: E,
    state: GameState<S, M>,
}

impl<S, M, E> LocalGame<S, M, E>
where
    E: GameEngine<S, M>,
    S: Clone,
    M: Clone + Debug,
{
    /// Starts a session at the engine's initial board.
    pub fn new(engine: E) -> Self {
        let state = GameState::new(engine.initial_state());
        Self { engine, state }
    }

    /// Rebuilds a session by replaying `history` from the initial board.
    ///
    /// Records are kept as given, timestamps included.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Replay`] naming the first record that is out of
    /// turn, follows a finished game, or is rejected by the engine.
    #[instrument(skip(engine, history), fields(moves = history.len()))]
    pub fn from_history(engine: E, history: Vec<MoveRecord<M>>) -> Result<Self, SessionError> {
        let state = replay(&engine, history)?;
        Ok(Self { engine, state })
    }

    /// Plays `mv` for whoever holds the turn.
    pub fn make_move(&mut self, mv: M) -> Result<(), SessionError> {
        let player = self.state.current_player;
        self.make_move_as(mv, player)
    }

    /// Plays `mv` for `player`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotYourTurn`] if `player` does not hold the turn.
    /// - [`SessionError::GameComplete`] once a result is recorded.
    /// - [`SessionError::InvalidMove`] if the engine rejects the move.
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(current = %self.state.current_player))]
    pub fn make_move_as(&mut self, mv: M, player: Player) -> Result<(), SessionError> {
        if player != self.state.current_player {
            warn!("Move attempted out of turn");
            return Err(SessionError::NotYourTurn(player));
        }
        if self.state.winner.is_some() {
            warn!("Move attempted after game completed");
            return Err(SessionError::GameComplete);
        }

        let transition = self
            .engine
            .reducer(&self.state.board_state, &mv, player)
            .map_err(|e| SessionError::InvalidMove(e.to_string()))?;

        let mut move_history = self.state.move_history.clone();
        move_history.push(MoveRecord::new(player, mv, Utc::now()));

        self.state = GameState {
            board_state: transition.state,
            current_player: player.opponent(),
            winner: transition.outcome,
            move_history,
        };

        if let Some(outcome) = self.state.winner {
            info!(%outcome, moves = self.state.move_history.len(), "Game complete");
        } else {
            debug!(next = %self.state.current_player, "Move accepted");
        }
        Ok(())
    }

    /// Discards the history and returns to the initial board with A to move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!(discarded = self.state.move_history.len(), "Resetting game");
        self.state = GameState::new(self.engine.initial_state());
    }

    /// Takes back the most recent move. Does nothing on an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Replay`] if the remaining history no longer
    /// replays; the session is unchanged in that case.
    #[instrument(skip(self), fields(moves = self.state.move_history.len()))]
    pub fn undo_last_move(&mut self) -> Result<(), SessionError> {
        let Some((_, remaining)) = self.state.move_history.split_last() else {
            debug!("Nothing to undo");
            return Ok(());
        };

        self.state = replay(&self.engine, remaining.to_vec())?;
        debug!(remaining = self.state.move_history.len(), "Move undone");
        Ok(())
    }

    /// Engine rendering of the current board.
    pub fn state_string(&self) -> String {
        self.engine.render(&self.state.board_state)
    }
}

impl<S, M, E> LocalGame<S, M, E> {
    /// Returns the full session snapshot.
    pub fn game_state(&self) -> &GameState<S, M> {
        &self.state
    }

    /// Returns true once a winner or draw is recorded.
    pub fn is_game_complete(&self) -> bool {
        self.state.winner.is_some()
    }

    /// Returns the result, `None` while the game is open.
    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Returns every accepted move, oldest first.
    pub fn move_history(&self) -> &[MoveRecord<M>] {
        &self.state.move_history
    }

    /// Returns true if there is a move to take back.
    pub fn can_undo(&self) -> bool {
        !self.state.move_history.is_empty()
    }

    /// Returns the engine driving this session.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Replays `history` from a fresh initial board.
///
/// Each record must belong to the player holding the turn and arrive before a
/// result is recorded, the same rules `make_move_as` applies.
fn replay<S, M, E>(engine: &E, history: Vec<MoveRecord<M>>) -> Result<GameState<S, M>, SessionError>
where
    E: GameEngine<S, M>,
{
    let mut state = GameState::new(engine.initial_state());

    for (index, record) in history.into_iter().enumerate() {
        let out_of_order = if record.player != state.current_player {
            Some(SessionError::NotYourTurn(record.player))
        } else if state.winner.is_some() {
            Some(SessionError::GameComplete)
        } else {
            None
        };
        if let Some(cause) = out_of_order {
            warn!(index, %cause, "History entry breaks turn order");
            return Err(SessionError::Replay {
                index,
                message: cause.to_string(),
            });
        }

        let transition = engine
            .reducer(&state.board_state, &record.mv, record.player)
            .map_err(|e| SessionError::Replay {
                index,
                message: e.to_string(),
            })?;

        state.board_state = transition.state;
        state.current_player = record.player.opponent();
        state.winner = transition.outcome;
        state.move_history.push(record);
    }

    Ok(state)
}
