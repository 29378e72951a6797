#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Term weights for faction scoring.
///
/// A candidate's score is the weighted sum of its tier, synergy,
/// counter, and preference terms. Weights are relative and need not
/// sum to anything in particular; setting one to zero removes that
/// term from consideration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuggestConfig {
    /// Weight of the tier term.
    /// Default: 1.0
    pub tier_weight: f64,

    /// Weight of the teammate synergy term.
    /// Default: 0.25
    pub synergy_weight: f64,

    /// Weight of the opponent counter term.
    /// Default: 0.25
    pub counter_weight: f64,

    /// Weight of the player preference term.
    /// Default: 1.0
    pub preference_weight: f64,

    /// Tier assumed for factions with no rating at the seat's
    /// position and map. Keeps unrated factions in the ranking at a
    /// middling level instead of dropping them.
    /// Default: 5.0
    pub default_tier: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            tier_weight: 1.0,
            synergy_weight: 0.25,
            counter_weight: 0.25,
            preference_weight: 1.0,
            default_tier: 5.0,
        }
    }
}

impl SuggestConfig {
    /// Sets the tier term weight.
    pub fn with_tier_weight(mut self, weight: f64) -> Self {
        self.tier_weight = weight;
        self
    }

    /// Sets the teammate synergy term weight.
    pub fn with_synergy_weight(mut self, weight: f64) -> Self {
        self.synergy_weight = weight;
        self
    }

    /// Sets the opponent counter term weight.
    pub fn with_counter_weight(mut self, weight: f64) -> Self {
        self.counter_weight = weight;
        self
    }

    /// Sets the player preference term weight.
    pub fn with_preference_weight(mut self, weight: f64) -> Self {
        self.preference_weight = weight;
        self
    }

    /// Sets the tier assumed for unrated factions.
    pub fn with_default_tier(mut self, tier: f64) -> Self {
        self.default_tier = tier;
        self
    }

    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("tier_weight", self.tier_weight),
            ("synergy_weight", self.synergy_weight),
            ("counter_weight", self.counter_weight),
            ("preference_weight", self.preference_weight),
            ("default_tier", self.default_tier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and non-negative", name));
            }
        }
        Ok(())
    }
}
