//! Player model shared by every pipeline stage.
//!
//! A [`Player`] carries everything the engine knows about one competitor:
//! identity, ratings, seating preference, faction preferences, and
//! per-position win history. Players are immutable during a balancing
//! call; the engine never writes back to them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque player identity.
///
/// Ordering follows the wrapped id and is used for deterministic
/// tie-breaking throughout the engine, never for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An assignable seat on a team.
///
/// Flanks are the outside seats, pockets the protected inside seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    Flank,
    Pocket,
}

impl Position {
    /// Returns the opposite seat type.
    pub fn other(self) -> Self {
        match self {
            Position::Flank => Position::Pocket,
            Position::Pocket => Position::Flank,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Flank => write!(f, "flank"),
            Position::Pocket => write!(f, "pocket"),
        }
    }
}

/// A player's stated seating preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preference {
    /// Wants an outside seat.
    Flank,
    /// Wants a protected inside seat.
    Pocket,
    /// No stated leaning; seatable anywhere without penalty.
    Any,
}

impl Default for Preference {
    fn default() -> Self {
        Preference::Any
    }
}

impl Preference {
    /// Whether seating at `position` satisfies this preference.
    ///
    /// `Any` is satisfied by every seat.
    pub fn accepts(self, position: Position) -> bool {
        match self {
            Preference::Flank => position == Position::Flank,
            Preference::Pocket => position == Position::Pocket,
            Preference::Any => true,
        }
    }
}

/// A competitor in the pool to be balanced.
///
/// # Builder Pattern
///
/// ```
/// use teamcomp::player::{Player, Position, Preference};
///
/// let player = Player::new(7)
///     .with_solo_rating(1650.0)
///     .with_team_rating(1580.0)
///     .with_preference(Preference::Pocket)
///     .with_win_rate(Position::Pocket, 0.61)
///     .with_preferred_factions(["Franks", "Huns"]);
///
/// assert_eq!(player.win_rate(Position::Pocket), Some(0.61));
/// assert_eq!(player.win_rate(Position::Flank), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// Identity, unique within a pool.
    pub id: PlayerId,

    /// Solo-queue rating. `None` falls back to the configured
    /// neutral rating, never an error.
    pub solo_rating: Option<f64>,

    /// Team-queue rating. `None` falls back to the configured
    /// neutral rating, never an error.
    pub team_rating: Option<f64>,

    /// Stated seating preference.
    pub preference: Preference,

    /// Ordered faction preference list, most preferred first.
    pub preferred_factions: Vec<String>,

    /// Historical win rate when playing flank, in `[0, 1]`.
    pub flank_win_rate: Option<f64>,

    /// Historical win rate when playing pocket, in `[0, 1]`.
    pub pocket_win_rate: Option<f64>,
}

impl Player {
    /// Creates a player with no ratings, no history, and no preferences.
    pub fn new(id: u64) -> Self {
        Self {
            id: PlayerId(id),
            solo_rating: None,
            team_rating: None,
            preference: Preference::Any,
            preferred_factions: Vec::new(),
            flank_win_rate: None,
            pocket_win_rate: None,
        }
    }

    /// Sets the solo-queue rating.
    pub fn with_solo_rating(mut self, rating: f64) -> Self {
        self.solo_rating = Some(rating);
        self
    }

    /// Sets the team-queue rating.
    pub fn with_team_rating(mut self, rating: f64) -> Self {
        self.team_rating = Some(rating);
        self
    }

    /// Sets the seating preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    /// Sets the ordered faction preference list, most preferred first.
    pub fn with_preferred_factions<I, S>(mut self, factions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_factions = factions.into_iter().map(Into::into).collect();
        self
    }

    /// Records the historical win rate for one position.
    pub fn with_win_rate(mut self, position: Position, rate: f64) -> Self {
        match position {
            Position::Flank => self.flank_win_rate = Some(rate),
            Position::Pocket => self.pocket_win_rate = Some(rate),
        }
        self
    }

    /// Historical win rate for `position`, if any is recorded.
    pub fn win_rate(&self, position: Position) -> Option<f64> {
        match position {
            Position::Flank => self.flank_win_rate,
            Position::Pocket => self.pocket_win_rate,
        }
    }
}
