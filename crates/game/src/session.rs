//! The game's turn/phase state machine.
//!
//! ## Phases
//! ```text
//! Welcome -> Player1Selecting -> Player2Selecting -> Ready -> Playing -> Finished
//!    ^                                                                     |
//!    +------------------------------- reset -------------------------------+
//! ```
//! `reset` is allowed from any phase.
//!
//! ## Positions
//! Player 1's picks are positions 1-3 and player 2's are 4-6, so a winning
//! die value indexes straight into the combined list.

use crate::dice::{DIE_FACES, DiceRoller};
use crate::error::{GameError, Result};
use crate::selection::{MOVIES_PER_PLAYER, MovieSelection, SelectionChange};
use crate::win::check_for_win;
use catalog::Movie;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Welcome,
    Player1Selecting,
    Player2Selecting,
    Ready,
    Playing,
    Finished,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Welcome => "welcome",
            GamePhase::Player1Selecting => "player1-selecting",
            GamePhase::Player2Selecting => "player2-selecting",
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// First board position (1-based) of this player's picks
    pub fn first_position(&self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => MOVIES_PER_PLAYER + 1,
        }
    }

    fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// The movie the dice picked
#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    /// The repeated die value, which is also the board position
    pub number: u8,
    pub movie: Movie,
    /// Whose pick it was
    pub owner: Player,
}

/// What a single roll did to the session
#[derive(Debug, Clone, PartialEq)]
pub struct RollOutcome {
    pub value: u8,
    pub rolled_by: Player,
    pub winner: Option<Winner>,
}

/// All state for one game, shared by both players on one screen
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    phase: GamePhase,
    selections: [MovieSelection; 2],
    current_player: Player,
    rolls: Vec<u8>,
    winner: Option<Winner>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whose turn it is to roll
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Who is picking movies right now, if anyone
    pub fn selecting_player(&self) -> Option<Player> {
        match self.phase {
            GamePhase::Player1Selecting => Some(Player::One),
            GamePhase::Player2Selecting => Some(Player::Two),
            _ => None,
        }
    }

    pub fn selection(&self, player: Player) -> &MovieSelection {
        &self.selections[player.index()]
    }

    /// Player 1's picks followed by player 2's, in board order
    pub fn all_movies(&self) -> Vec<&Movie> {
        self.selections
            .iter()
            .flat_map(|s| s.movies().iter())
            .collect()
    }

    /// Movie at a 1-based board position, with the player who picked it
    pub fn movie_at_position(&self, position: usize) -> Option<(Player, &Movie)> {
        let (player, slot) = if position == 0 {
            return None;
        } else if position <= MOVIES_PER_PLAYER {
            (Player::One, position - 1)
        } else {
            (Player::Two, position - 1 - MOVIES_PER_PLAYER)
        };
        self.selection(player).get(slot).map(|m| (player, m))
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Welcome -> Player1Selecting
    pub fn start(&mut self) -> Result<()> {
        self.expect_phase("start a game", &[GamePhase::Welcome])?;
        self.set_phase(GamePhase::Player1Selecting);
        Ok(())
    }

    /// Pick or un-pick a movie for whoever is selecting
    ///
    /// Player 2 may not pick a movie player 1 already has.
    pub fn toggle_movie(&mut self, movie: &Movie) -> Result<SelectionChange> {
        let player = self.require_selector("select movies")?;

        let opponent = player.other();
        if self.selection(opponent).contains(movie.id) {
            return Err(GameError::AlreadyPicked {
                movie_id: movie.id,
                by: opponent,
            });
        }

        let change = self.selections[player.index()].toggle(movie);
        match change {
            SelectionChange::Rejected => {
                return Err(GameError::SelectionFull {
                    player,
                    capacity: MOVIES_PER_PLAYER,
                });
            }
            SelectionChange::Added(slot) => {
                debug!("{} picked {} at position {}", player, movie, player.first_position() + slot)
            }
            SelectionChange::Removed => debug!("{} dropped {}", player, movie),
        }
        Ok(change)
    }

    /// Drop all of the selecting player's picks
    pub fn clear_selection(&mut self) -> Result<()> {
        let player = self.require_selector("clear a selection")?;
        self.selections[player.index()].clear();
        Ok(())
    }

    /// Lock in the selecting player's picks and move on
    ///
    /// Player1Selecting -> Player2Selecting -> Ready. Needs exactly
    /// `MOVIES_PER_PLAYER` picks.
    pub fn confirm_selection(&mut self) -> Result<GamePhase> {
        let player = self.require_selector("confirm a selection")?;

        let selection = self.selection(player);
        if !selection.is_complete() {
            return Err(GameError::SelectionIncomplete {
                player,
                selected: selection.len(),
                required: MOVIES_PER_PLAYER,
            });
        }

        let next = match player {
            Player::One => GamePhase::Player2Selecting,
            Player::Two => GamePhase::Ready,
        };
        self.set_phase(next);
        Ok(next)
    }

    /// Roll the die for the current player
    pub fn roll(&mut self, dice: &mut impl DiceRoller) -> Result<RollOutcome> {
        self.expect_phase("roll", &[GamePhase::Ready, GamePhase::Playing])?;
        self.record_roll(dice.roll())
    }

    /// Apply an externally produced die value
    ///
    /// ## Algorithm
    /// 1. Ready becomes Playing on the first roll
    /// 2. Append the value to the history
    /// 3. If a value has now repeated and a movie sits at that position, the
    ///    game is Finished with that movie as the winner
    /// 4. Otherwise the turn passes to the other player
    pub fn record_roll(&mut self, value: u8) -> Result<RollOutcome> {
        self.expect_phase("roll", &[GamePhase::Ready, GamePhase::Playing])?;
        if !(1..=DIE_FACES).contains(&value) {
            return Err(GameError::InvalidDieValue(value));
        }

        if self.phase == GamePhase::Ready {
            self.set_phase(GamePhase::Playing);
        }

        let rolled_by = self.current_player;
        self.rolls.push(value);
        debug!("{} rolled {} (history: {:?})", rolled_by, value, self.rolls);

        let winner = check_for_win(&self.rolls).and_then(|number| {
            self.movie_at_position(number as usize)
                .map(|(owner, movie)| Winner {
                    number,
                    movie: movie.clone(),
                    owner,
                })
        });

        match &winner {
            Some(w) => {
                info!(
                    "Winner after {} rolls: #{} {} ({}'s pick)",
                    self.rolls.len(),
                    w.number,
                    w.movie,
                    w.owner
                );
                self.winner = Some(w.clone());
                self.set_phase(GamePhase::Finished);
            }
            None => self.current_player = rolled_by.other(),
        }

        Ok(RollOutcome {
            value,
            rolled_by,
            winner,
        })
    }

    /// Back to Welcome with everything cleared
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn expect_phase(&self, action: &'static str, allowed: &[GamePhase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn require_selector(&self, action: &'static str) -> Result<Player> {
        self.selecting_player().ok_or(GameError::WrongPhase {
            action,
            phase: self.phase,
        })
    }

    fn set_phase(&mut self, phase: GamePhase) {
        info!("Phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }
}
