//! The game-agnostic engine contract.
//!
//! An engine is a stateless rule-set for one two-player, turn-based,
//! perfect-information game. It hands out fresh starting boards, applies
//! moves without touching its input, and renders boards for diagnostics.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One of the two seats at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player A (moves first).
    #[display("a")]
    A,
    /// Player B.
    #[display("b")]
    B,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Upper-case marker used on rendered boards.
    pub fn label(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A player completed a winning line.
    Winner(Player),
    /// No legal moves remain and nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player.label()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of applying one move: the next board and, if the move ended the
/// game, its outcome.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Transition<S> {
    /// The board after the move.
    pub state: S,
    /// Set when the move produced a terminal board.
    pub outcome: Option<Outcome>,
}

/// Rules for a two-player game over board type `S` and move type `M`.
///
/// Implementations hold no per-game data. `reducer` borrows the board
/// immutably and must build a new one, which is what lets a session undo by
/// replaying history from `initial_state`.
pub trait GameEngine<S, M> {
    /// Rules violation reported by `reducer`.
    type Error: std::error::Error;

    /// Returns a freshly allocated starting board.
    fn initial_state(&self) -> S;

    /// Applies `mv` for player `by`.
    ///
    /// Illegal moves are errors, never silently ignored. The same inputs
    /// always produce the same result.
    fn reducer(&self, state: &S, mv: &M, by: Player) -> Result<Transition<S>, Self::Error>;

    /// Deterministic human-readable rendering of `state`.
    fn render(&self, state: &S) -> String;
}

impl<S, M, E> GameEngine<S, M> for &E
where
    E: GameEngine<S, M> + ?Sized,
{
    type Error = E::Error;

    fn initial_state(&self) -> S {
        (**self).initial_state()
    }

    fn reducer(&self, state: &S, mv: &M, by: Player) -> Result<Transition<S>, Self::Error> {
        (**self).reducer(state, mv, by)
    }

    fn render(&self, state: &S) -> String {
        (**self).render(state)
    }
}

impl<S, M, E> GameEngine<S, M> for Arc<E>
where
    E: GameEngine<S, M> + ?Sized,
{
    type Error = E::Error;

    fn initial_state(&self) -> S {
        (**self).initial_state()
    }

    fn reducer(&self, state: &S, mv: &M, by: Player) -> Result<Transition<S>, Self::Error> {
        (**self).reducer(state, mv, by)
    }

    fn render(&self, state: &S) -> String {
        (**self).render(state)
    }
}
