#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::composition::{Composition, CompositionScorer};
use crate::error::BalanceError;
use crate::partition::{partition_count, PartitionIter};
use crate::player::{Player, PlayerId};
use crate::rating::RatingNormalizer;
use crate::selection::{Selection, TopNSelector};

use super::config::BalanceConfig;

/// Outcome of a balancing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceResult {
    /// Selected compositions, best first.
    pub compositions: Vec<Composition>,
    /// Whether the work bound cut enumeration short.
    pub truncated: bool,
    /// Whether fewer compositions than requested survived selection.
    pub shortfall: bool,
    /// Candidate partitions actually scored.
    pub partitions_examined: usize,
    /// Closed-form count of all candidate partitions, when it fits in
    /// `u128`.
    pub partitions_total: Option<u128>,
}

impl BalanceResult {
    /// The best composition, if any survived selection.
    pub fn best(&self) -> Option<&Composition> {
        self.compositions.first()
    }
}

/// End-to-end team balancer.
///
/// Normalizes ratings into per-position strengths, enumerates every
/// way to split the pool into equal teams, scores each split, and
/// keeps the most balanced few. Results are deterministic for a given
/// pool and configuration.
///
/// # Examples
///
/// ```
/// use teamcomp::balancer::{BalanceConfig, Balancer};
/// use teamcomp::player::Player;
///
/// let players = vec![
///     Player::new(0).with_solo_rating(2000.0).with_team_rating(2000.0),
///     Player::new(1).with_solo_rating(1800.0).with_team_rating(1800.0),
///     Player::new(2).with_solo_rating(1600.0).with_team_rating(1600.0),
///     Player::new(3).with_solo_rating(1400.0).with_team_rating(1400.0),
/// ];
///
/// let balancer = Balancer::new(BalanceConfig::default()).unwrap();
/// let result = balancer.balance(&players, 2).unwrap();
///
/// assert_eq!(result.best().unwrap().balance_diff_pct, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Balancer {
    config: BalanceConfig,
    normalizer: RatingNormalizer,
    selector: TopNSelector,
}

impl Balancer {
    /// Creates a balancer, validating every stage configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidConfiguration`] describing the
    /// first invalid parameter.
    pub fn new(config: BalanceConfig) -> Result<Self, BalanceError> {
        let normalizer = RatingNormalizer::new(config.rating.clone())?;
        let selector = TopNSelector::new(config.selector.clone())?;
        Ok(Self {
            config,
            normalizer,
            selector,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Balances the pool into teams of `team_size`, returning up to the
    /// configured number of compositions.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidTeamSize`] when the pool does not
    /// divide into complete teams, and [`BalanceError::DegenerateInput`]
    /// when a candidate team has zero total strength.
    ///
    /// # Panics
    ///
    /// Panics if two players share an id.
    pub fn balance(&self, players: &[Player], team_size: usize) -> Result<BalanceResult, BalanceError> {
        self.balance_with_limit(players, team_size, self.config.selector.limit)
    }

    /// Balances with a per-call limit override.
    ///
    /// Requesting more compositions than the pool admits is not an
    /// error; the result reports the shortfall instead.
    ///
    /// # Errors
    ///
    /// Same conditions as [`balance`](Self::balance).
    ///
    /// # Panics
    ///
    /// Panics if two players share an id or `limit` is zero.
    pub fn balance_with_limit(
        &self,
        players: &[Player],
        team_size: usize,
        limit: usize,
    ) -> Result<BalanceResult, BalanceError> {
        assert_unique_ids(players);

        let partitions = PartitionIter::new(players.len(), team_size)?;
        let total = partition_count(players.len(), team_size);
        let table = self.normalizer.table(players);
        let scorer = CompositionScorer::new(players, &table);

        log::debug!(
            "balancing {} players into teams of {} (total partitions: {:?})",
            players.len(),
            team_size,
            total
        );

        let selection = self.run(partitions, &scorer, limit)?;
        Ok(BalanceResult {
            compositions: selection.compositions,
            truncated: selection.truncated,
            shortfall: selection.shortfall,
            partitions_examined: selection.examined,
            partitions_total: total,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn run(
        &self,
        partitions: PartitionIter,
        scorer: &CompositionScorer<'_>,
        limit: usize,
    ) -> Result<Selection, BalanceError> {
        self.selector
            .select_with_limit(partitions.map(|p| scorer.score(&p)), limit)
    }

    #[cfg(feature = "parallel")]
    fn run(
        &self,
        mut partitions: PartitionIter,
        scorer: &CompositionScorer<'_>,
        limit: usize,
    ) -> Result<Selection, BalanceError> {
        use rayon::prelude::*;

        if !self.config.parallel {
            return self
                .selector
                .select_with_limit(partitions.map(|p| scorer.score(&p)), limit);
        }

        // Pre-score in ordered chunks up to the selector's work bound.
        // The unscored remainder stays chained behind the buffer so the
        // selector sees the same stream the sequential path would,
        // truncation probe included.
        const CHUNK: usize = 1024;
        let budget = self.config.selector.max_partitions;
        let mut scored: Vec<Result<Composition, BalanceError>> = Vec::new();
        while scored.len() < budget {
            let take = CHUNK.min(budget - scored.len());
            let chunk: Vec<_> = partitions.by_ref().take(take).collect();
            let drained = chunk.len() < take;
            let mut batch: Vec<_> = chunk.into_par_iter().map(|p| scorer.score(&p)).collect();
            scored.append(&mut batch);
            if drained {
                break;
            }
        }

        self.selector.select_with_limit(
            scored
                .into_iter()
                .chain(partitions.map(|p| scorer.score(&p))),
            limit,
        )
    }
}

fn assert_unique_ids(players: &[Player]) {
    let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert!(
        ids.len() == players.len(),
        "duplicate player ids in the pool"
    );
}
