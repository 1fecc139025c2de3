//! # Game Crate
//!
//! The rules of the movie dice game, free of any I/O.
//!
//! ## How a game goes
//!
//! 1. Player 1 picks three movies (board positions 1-3)
//! 2. Player 2 picks three different movies (positions 4-6)
//! 3. The players take turns rolling one die
//! 4. The first number to come up twice wins: the movie at that position is
//!    what everyone watches
//!
//! ## Components
//!
//! - **win**: `check_for_win`, a pure function over the roll history
//! - **dice**: `DiceRoller` trait with random and scripted dice
//! - **selection**: `MovieSelection`, a bounded ordered set of picks
//! - **session**: `GameSession`, the phase/turn state machine
//!
//! ## Example Usage
//!
//! ```ignore
//! use game::{GameSession, RandomDice};
//!
//! let mut session = GameSession::new();
//! session.start()?;
//! for movie in &player_one_picks {
//!     session.toggle_movie(movie)?;
//! }
//! session.confirm_selection()?;
//! // ... player two ...
//!
//! let mut dice = RandomDice::new();
//! loop {
//!     let outcome = session.roll(&mut dice)?;
//!     if let Some(winner) = outcome.winner {
//!         println!("Watch {}!", winner.movie);
//!         break;
//!     }
//! }
//! ```

// Public modules
pub mod dice;
pub mod error;
pub mod selection;
pub mod session;
pub mod win;

// Re-export commonly used types
pub use dice::{DIE_FACES, DiceRoller, RandomDice, ScriptedDice};
pub use error::{GameError, Result};
pub use selection::{MOVIES_PER_PLAYER, MovieSelection, SelectionChange};
pub use session::{GamePhase, GameSession, Player, RollOutcome, Winner};
pub use win::check_for_win;

/// Roll until some value repeats, returning the full sequence and the winner
///
/// With six faces a repeat is guaranteed within seven rolls.
pub fn roll_until_win(dice: &mut impl DiceRoller) -> (Vec<u8>, u8) {
    let mut rolls = Vec::with_capacity(DIE_FACES as usize + 1);
    loop {
        rolls.push(dice.roll());
        if let Some(winner) = check_for_win(&rolls) {
            return (rolls, winner);
        }
    }
}
