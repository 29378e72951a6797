//! Ranking, diversity filtering, and the work bound.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::error::BalanceError;

use super::config::SelectorConfig;

/// Outcome of a selection pass.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    /// Chosen compositions, best first.
    pub compositions: Vec<Composition>,
    /// The stream still had candidates when the work bound hit.
    pub truncated: bool,
    /// Fewer diverse compositions existed than were asked for.
    pub shortfall: bool,
    /// Candidates actually examined.
    pub examined: usize,
}

/// Picks the best few mutually diverse compositions from a stream.
///
/// Candidates are ranked by balance spread, then preference
/// violations, then fingerprint, so equal-quality streams always
/// resolve the same way. Ranking happens in a bounded best-so-far
/// buffer; the diversity filter then walks the buffer in rank order
/// and keeps a candidate only when it differs enough from everything
/// kept before it.
#[derive(Debug, Clone)]
pub struct TopNSelector {
    config: SelectorConfig,
}

impl TopNSelector {
    /// Creates a selector, validating the configuration.
    pub fn new(config: SelectorConfig) -> Result<Self, BalanceError> {
        config
            .validate()
            .map_err(BalanceError::InvalidConfiguration)?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Selects with the configured limit.
    pub fn select<I>(&self, candidates: I) -> Result<Selection, BalanceError>
    where
        I: IntoIterator<Item = Result<Composition, BalanceError>>,
    {
        self.select_with_limit(candidates, self.config.limit)
    }

    /// Selects with a per-call limit override.
    ///
    /// The ranked buffer grows to `limit` when the override exceeds
    /// the configured cap.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn select_with_limit<I>(
        &self,
        candidates: I,
        limit: usize,
    ) -> Result<Selection, BalanceError>
    where
        I: IntoIterator<Item = Result<Composition, BalanceError>>,
    {
        assert!(limit > 0, "limit must be at least 1");
        let cap = self.config.buffer_cap.max(limit);

        let mut iter = candidates.into_iter();
        let mut buffer: Vec<Composition> = Vec::new();
        let mut examined = 0usize;
        let mut exhausted = false;

        while examined < self.config.max_partitions {
            match iter.next() {
                Some(Ok(candidate)) => {
                    examined += 1;
                    offer(&mut buffer, cap, candidate);
                }
                Some(Err(e)) => return Err(e),
                None => {
                    exhausted = true;
                    break;
                }
            }
        }
        let truncated = !exhausted && iter.next().is_some();

        let mut compositions: Vec<Composition> = Vec::with_capacity(limit);
        for candidate in buffer {
            if compositions.len() == limit {
                break;
            }
            let diverse = compositions.iter().all(|kept| {
                candidate.fingerprint.overlap(&kept.fingerprint) < self.config.max_overlap
            });
            if diverse {
                compositions.push(candidate);
            }
        }
        let shortfall = compositions.len() < limit;

        log::debug!(
            "selection examined {} candidates, kept {} of {} requested (truncated: {})",
            examined,
            compositions.len(),
            limit,
            truncated
        );

        Ok(Selection {
            compositions,
            truncated,
            shortfall,
            examined,
        })
    }
}

/// Ranking order: spread, then violations, then fingerprint.
///
/// `total_cmp` keeps the order total even on pathological floats.
fn rank(a: &Composition, b: &Composition) -> Ordering {
    a.balance_diff_pct
        .total_cmp(&b.balance_diff_pct)
        .then_with(|| a.violations.cmp(&b.violations))
        .then_with(|| a.fingerprint.cmp(&b.fingerprint))
}

/// Inserts into the ranked buffer, evicting the worst entry beyond
/// `cap`. The incumbent best can never be evicted, so the overall best
/// candidate survives any stream order.
fn offer(buffer: &mut Vec<Composition>, cap: usize, candidate: Composition) {
    if buffer.len() == cap {
        match buffer.last() {
            Some(worst) if rank(&candidate, worst) == Ordering::Less => {
                buffer.pop();
            }
            _ => return,
        }
    }
    let at = buffer.partition_point(|kept| rank(kept, &candidate) != Ordering::Greater);
    buffer.insert(at, candidate);
}
