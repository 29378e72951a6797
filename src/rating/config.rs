//! Rating normalization parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`RatingNormalizer`](super::RatingNormalizer).
///
/// # Defaults
///
/// ```
/// use teamcomp::rating::RatingConfig;
///
/// let config = RatingConfig::default();
/// assert_eq!(config.solo_weight, 0.4);
/// assert_eq!(config.team_weight, 0.6);
/// assert_eq!(config.neutral_rating, 1000.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use teamcomp::rating::RatingConfig;
///
/// let config = RatingConfig::default()
///     .with_weights(0.5, 0.5)
///     .with_winrate_influence(0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RatingConfig {
    /// Weight of the solo-queue rating in the base score (0.0-1.0).
    ///
    /// Must sum to 1.0 with `team_weight`. Team games are usually
    /// better predicted by the team rating, hence the lower default.
    pub solo_weight: f64,

    /// Weight of the team-queue rating in the base score (0.0-1.0).
    pub team_weight: f64,

    /// Fallback applied wherever a rating is missing.
    ///
    /// Unrated players are treated as mid-ladder rather than rejected.
    pub neutral_rating: f64,

    /// Strength multiplier for a seat that contradicts the stated
    /// preference. Must satisfy `0 < min <= 1`.
    pub position_factor_min: f64,

    /// Strength multiplier for a seat that matches the stated
    /// preference. Must satisfy `max >= 1`. Players with no stated
    /// preference always get factor 1.0.
    pub position_factor_max: f64,

    /// Half-width of the historical win-rate adjustment band.
    ///
    /// A win rate of 1.0 scales strength by `1 + winrate_influence`,
    /// a win rate of 0.0 by `1 - winrate_influence`, and 0.5 is
    /// neutral. Missing history contributes factor 1.0. Must be in
    /// `[0, 1)`.
    pub winrate_influence: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            solo_weight: 0.4,
            team_weight: 0.6,
            neutral_rating: 1000.0,
            position_factor_min: 0.9,
            position_factor_max: 1.1,
            winrate_influence: 0.05,
        }
    }
}

impl RatingConfig {
    /// Sets both rating weights at once.
    pub fn with_weights(mut self, solo: f64, team: f64) -> Self {
        self.solo_weight = solo;
        self.team_weight = team;
        self
    }

    /// Sets the fallback for missing ratings.
    pub fn with_neutral_rating(mut self, rating: f64) -> Self {
        self.neutral_rating = rating;
        self
    }

    /// Sets the position factor band.
    pub fn with_position_factors(mut self, min: f64, max: f64) -> Self {
        self.position_factor_min = min;
        self.position_factor_max = max;
        self
    }

    /// Sets the win-rate adjustment half-width.
    pub fn with_winrate_influence(mut self, influence: f64) -> Self {
        self.winrate_influence = influence;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.solo_weight.is_finite() || !(0.0..=1.0).contains(&self.solo_weight) {
            return Err("solo_weight must be in [0, 1]".into());
        }
        if !self.team_weight.is_finite() || !(0.0..=1.0).contains(&self.team_weight) {
            return Err("team_weight must be in [0, 1]".into());
        }
        if (self.solo_weight + self.team_weight - 1.0).abs() > 1e-6 {
            return Err("solo_weight and team_weight must sum to 1.0".into());
        }
        if !self.neutral_rating.is_finite() || self.neutral_rating < 0.0 {
            return Err("neutral_rating must be finite and non-negative".into());
        }
        if !self.position_factor_min.is_finite()
            || self.position_factor_min <= 0.0
            || self.position_factor_min > 1.0
        {
            return Err("position_factor_min must be in (0, 1]".into());
        }
        if !self.position_factor_max.is_finite() || self.position_factor_max < 1.0 {
            return Err("position_factor_max must be at least 1.0".into());
        }
        if !self.winrate_influence.is_finite() || !(0.0..1.0).contains(&self.winrate_influence) {
            return Err("winrate_influence must be in [0, 1)".into());
        }
        Ok(())
    }
}
