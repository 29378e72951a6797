#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rating::RatingConfig;
use crate::selection::SelectorConfig;

/// Configuration for a [`Balancer`](crate::balancer::Balancer).
///
/// Bundles the per-stage configs with execution toggles. Defaults
/// match the stage defaults; `parallel` only takes effect when the
/// `parallel` feature is enabled.
///
/// # Examples
///
/// ```
/// use teamcomp::balancer::BalanceConfig;
/// use teamcomp::rating::RatingConfig;
///
/// let config = BalanceConfig::default()
///     .with_rating(RatingConfig::default().with_weights(0.5, 0.5))
///     .with_limit(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceConfig {
    /// Rating normalization parameters.
    pub rating: RatingConfig,

    /// Selection parameters (limit, diversity, work bound).
    pub selector: SelectorConfig,

    /// Score candidate partitions on a thread pool when the `parallel`
    /// feature is enabled. Results are identical either way.
    /// Default: true
    pub parallel: bool,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            rating: RatingConfig::default(),
            selector: SelectorConfig::default(),
            parallel: true,
        }
    }
}

impl BalanceConfig {
    /// Sets the rating normalization config.
    pub fn with_rating(mut self, rating: RatingConfig) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the selection config.
    pub fn with_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    /// Sets how many compositions to return.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.selector.limit = limit;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates all stage configurations.
    pub fn validate(&self) -> Result<(), String> {
        self.rating.validate()?;
        self.selector.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BalanceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_with_limit_forwards_to_selector() {
        let config = BalanceConfig::default().with_limit(7);
        assert_eq!(config.selector.limit, 7);
    }

    #[test]
    fn test_invalid_stage_config_is_reported() {
        let config = BalanceConfig::default().with_rating(RatingConfig::default().with_weights(0.9, 0.9));
        assert!(config.validate().is_err());

        let config = BalanceConfig::default().with_limit(0);
        assert!(config.validate().is_err());
    }
}
