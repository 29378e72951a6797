//! Positional strength scoring.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BalanceError;
use crate::player::{Player, Position, Preference};

use super::config::RatingConfig;

/// Computes a single positional strength score per player.
///
/// # Usage
///
/// ```
/// use teamcomp::player::{Player, Position, Preference};
/// use teamcomp::rating::{RatingConfig, RatingNormalizer};
///
/// let normalizer = RatingNormalizer::new(RatingConfig::default()).unwrap();
/// let player = Player::new(1)
///     .with_solo_rating(1500.0)
///     .with_team_rating(1500.0)
///     .with_preference(Preference::Flank);
///
/// // Preferred seat scores higher than the off seat.
/// let on = normalizer.score(&player, Position::Flank);
/// let off = normalizer.score(&player, Position::Pocket);
/// assert!(on > off);
/// ```
#[derive(Debug, Clone)]
pub struct RatingNormalizer {
    config: RatingConfig,
}

impl RatingNormalizer {
    /// Creates a normalizer, validating the configuration.
    pub fn new(config: RatingConfig) -> Result<Self, BalanceError> {
        config
            .validate()
            .map_err(BalanceError::InvalidConfiguration)?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Effective strength of `player` when seated at `position`.
    ///
    /// Base rating times position factor times win-rate factor. Each
    /// term stays inside its configured band, so the result is always
    /// finite and non-negative for valid configs and ratings.
    pub fn score(&self, player: &Player, position: Position) -> f64 {
        self.base(player) * self.position_factor(player.preference, position)
            * self.history_factor(player, position)
    }

    /// Precomputes both per-position strengths for every player.
    ///
    /// The search evaluates each player at each seat many times; the
    /// table makes that a plain indexed read.
    pub fn table(&self, players: &[Player]) -> StrengthTable {
        StrengthTable {
            flank: players
                .iter()
                .map(|p| self.score(p, Position::Flank))
                .collect(),
            pocket: players
                .iter()
                .map(|p| self.score(p, Position::Pocket))
                .collect(),
        }
    }

    /// Weighted solo/team mix with neutral fallback for missing ratings.
    fn base(&self, player: &Player) -> f64 {
        let solo = player.solo_rating.unwrap_or(self.config.neutral_rating);
        let team = player.team_rating.unwrap_or(self.config.neutral_rating);
        self.config.solo_weight * solo + self.config.team_weight * team
    }

    fn position_factor(&self, preference: Preference, position: Position) -> f64 {
        match preference {
            Preference::Any => 1.0,
            p if p.accepts(position) => self.config.position_factor_max,
            _ => self.config.position_factor_min,
        }
    }

    /// Win-rate nudge: 0.5 is neutral, the band is
    /// `1 ± winrate_influence`. Out-of-range history is clamped.
    fn history_factor(&self, player: &Player, position: Position) -> f64 {
        match player.win_rate(position) {
            Some(rate) => {
                let rate = rate.clamp(0.0, 1.0);
                1.0 + self.config.winrate_influence * (rate - 0.5) * 2.0
            }
            None => 1.0,
        }
    }
}

/// Precomputed (player, position) strengths for one pool.
///
/// Indexed by the player's position in the input slice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrengthTable {
    flank: Vec<f64>,
    pocket: Vec<f64>,
}

impl StrengthTable {
    /// Number of players covered.
    pub fn len(&self) -> usize {
        self.flank.len()
    }

    /// Whether the table covers no players.
    pub fn is_empty(&self) -> bool {
        self.flank.is_empty()
    }

    /// Strength of player `index` when seated at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn strength(&self, index: usize, position: Position) -> f64 {
        match position {
            Position::Flank => self.flank[index],
            Position::Pocket => self.pocket[index],
        }
    }
}
