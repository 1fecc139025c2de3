//! Error types for the game crate.
//!
//! Every illegal move on a `GameSession` maps to one of these. A rejected
//! move never changes the session.

use crate::session::{GamePhase, Player};
use catalog::MovieId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// The action isn't allowed in the current phase
    #[error("Cannot {action} while in phase {phase}")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },

    /// The selecting player already has a full set
    #[error("{player} already has {capacity} movies selected")]
    SelectionFull { player: Player, capacity: usize },

    /// Tried to move on before picking enough movies
    #[error("{player} has selected {selected} of {required} movies")]
    SelectionIncomplete {
        player: Player,
        selected: usize,
        required: usize,
    },

    /// The two players' picks must not overlap
    #[error("Movie {movie_id} was already picked by {by}")]
    AlreadyPicked { movie_id: MovieId, by: Player },

    /// A die value outside 1..=6
    #[error("Invalid die value: {0}")]
    InvalidDieValue(u8),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, GameError>;
