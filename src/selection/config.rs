//! Selection parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`TopNSelector`](super::TopNSelector).
///
/// # Defaults
///
/// ```
/// use teamcomp::selection::SelectorConfig;
///
/// let config = SelectorConfig::default();
/// assert_eq!(config.limit, 3);
/// assert_eq!(config.max_overlap, 0.5);
/// assert_eq!(config.max_partitions, 50_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectorConfig {
    /// How many compositions to hand back.
    pub limit: usize,

    /// Diversity threshold in `(0, 1]`.
    ///
    /// A candidate is kept only when its teammate-pair overlap with
    /// every already kept composition stays below this fraction.
    /// 1.0 disables the filter (only an identical split overlaps
    /// fully).
    pub max_overlap: f64,

    /// Hard bound on how many candidates one call may examine.
    ///
    /// Pools beyond roughly a dozen players have more splits than
    /// anyone can wait for; the bound turns that into a truncated,
    /// best-effort answer.
    pub max_partitions: usize,

    /// Size of the ranked best-so-far buffer.
    ///
    /// Diversity is filtered from this buffer after ranking, so the
    /// buffer is what bounds memory. A small buffer can miss a diverse
    /// runner-up on very large truncated searches; raise it if that
    /// matters more than memory.
    pub buffer_cap: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            max_overlap: 0.5,
            max_partitions: 50_000,
            buffer_cap: 64,
        }
    }
}

impl SelectorConfig {
    /// Sets the number of compositions to return.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the diversity threshold.
    pub fn with_max_overlap(mut self, overlap: f64) -> Self {
        self.max_overlap = overlap;
        self
    }

    /// Sets the work bound.
    pub fn with_max_partitions(mut self, bound: usize) -> Self {
        self.max_partitions = bound;
        self
    }

    /// Sets the ranked buffer size.
    pub fn with_buffer_cap(mut self, cap: usize) -> Self {
        self.buffer_cap = cap;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 {
            return Err("limit must be at least 1".into());
        }
        if !self.max_overlap.is_finite() || self.max_overlap <= 0.0 || self.max_overlap > 1.0 {
            return Err("max_overlap must be in (0, 1]".into());
        }
        if self.max_partitions == 0 {
            return Err("max_partitions must be at least 1".into());
        }
        if self.buffer_cap < self.limit {
            return Err("buffer_cap must be at least limit".into());
        }
        Ok(())
    }
}
