//! Partition scoring.

use crate::assignment::{assign, default_slots};
use crate::error::BalanceError;
use crate::player::Player;
use crate::rating::StrengthTable;

use super::types::{Composition, Fingerprint, SeatedPlayer, Team};

/// Seats and scores raw partitions against a fixed pool.
///
/// Borrows the pool and its strength table for the duration of one
/// search. Scoring is pure, so a scorer can be shared across threads.
///
/// # Usage
///
/// ```
/// use teamcomp::composition::CompositionScorer;
/// use teamcomp::player::Player;
/// use teamcomp::rating::{RatingConfig, RatingNormalizer};
///
/// let players: Vec<Player> = (0..4)
///     .map(|i| Player::new(i).with_solo_rating(1000.0 + 200.0 * i as f64))
///     .collect();
/// let normalizer = RatingNormalizer::new(RatingConfig::default()).unwrap();
/// let table = normalizer.table(&players);
///
/// let scorer = CompositionScorer::new(&players, &table);
/// let comp = scorer.score(&[vec![0, 3], vec![1, 2]]).unwrap();
/// assert_eq!(comp.balance_diff_pct, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CompositionScorer<'a> {
    players: &'a [Player],
    table: &'a StrengthTable,
}

impl<'a> CompositionScorer<'a> {
    /// Creates a scorer over one pool.
    ///
    /// # Panics
    ///
    /// Panics if the table does not cover exactly the given pool.
    pub fn new(players: &'a [Player], table: &'a StrengthTable) -> Self {
        assert_eq!(
            players.len(),
            table.len(),
            "strength table must cover the pool"
        );
        Self { players, table }
    }

    /// Seats every team of `partition` and scores the outcome.
    ///
    /// Returns [`BalanceError::DegenerateInput`] when a team's total
    /// strength is not positive, which makes relative spread
    /// meaningless.
    pub fn score(&self, partition: &[Vec<usize>]) -> Result<Composition, BalanceError> {
        let mut teams = Vec::with_capacity(partition.len());
        let mut team_ids = Vec::with_capacity(partition.len());
        let mut violations = 0;

        for (index, members) in partition.iter().enumerate() {
            let assignment = assign(members, self.players, default_slots(members.len()));
            violations += assignment.violations;

            let mut seated = Vec::with_capacity(assignment.seats.len());
            let mut total = 0.0;
            for seat in &assignment.seats {
                let strength = self.table.strength(seat.player, seat.position);
                total += strength;
                seated.push(SeatedPlayer {
                    player: self.players[seat.player].id,
                    position: seat.position,
                    strength,
                });
            }
            if total <= 0.0 {
                return Err(BalanceError::DegenerateInput { team: index });
            }

            team_ids.push(seated.iter().map(|s| s.player).collect());
            teams.push(Team {
                members: seated,
                total_strength: total,
            });
        }

        Ok(Composition {
            balance_diff_pct: balance_diff_pct(&teams),
            violations,
            fingerprint: Fingerprint::from_teams(&team_ids),
            teams,
        })
    }
}

/// Relative strength spread: `100 * (max - min) / mean`.
///
/// Every total is known positive here, so the mean cannot be zero.
fn balance_diff_pct(teams: &[Team]) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for team in teams {
        min = min.min(team.total_strength);
        max = max.max(team.total_strength);
        sum += team.total_strength;
    }
    let mean = sum / teams.len() as f64;
    100.0 * (max - min) / mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerId, Position, Preference};
    use crate::rating::{RatingConfig, RatingNormalizer};

    fn scored(
        players: &[Player],
        config: RatingConfig,
        partition: &[Vec<usize>],
    ) -> Result<Composition, BalanceError> {
        let normalizer = RatingNormalizer::new(config).unwrap();
        let table = normalizer.table(players);
        CompositionScorer::new(players, &table).score(partition)
    }

    fn solo_pool(ratings: &[f64]) -> Vec<Player> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| Player::new(i as u64).with_solo_rating(r))
            .collect()
    }

    #[test]
    fn test_equal_totals_score_zero() {
        // With equal weights and no team ratings, bases are
        // 1500/1400/1300/1200; pairing extremes makes both teams 2700.
        let players = solo_pool(&[2000.0, 1800.0, 1600.0, 1400.0]);
        let config = RatingConfig::default().with_weights(0.5, 0.5);

        let comp = scored(&players, config, &[vec![0, 3], vec![1, 2]]).unwrap();
        assert_eq!(comp.balance_diff_pct, 0.0);
        assert_eq!(comp.violations, 0);
        assert!((comp.teams[0].total_strength - 2700.0).abs() < 1e-9);
        assert!((comp.teams[1].total_strength - 2700.0).abs() < 1e-9);
    }

    #[test]
    fn test_spread_uses_mean_denominator() {
        let players = solo_pool(&[1000.0, 1000.0, 1100.0, 1100.0]);
        let config = RatingConfig::default().with_weights(1.0, 0.0);

        // Teams total 2000 and 2200: spread = 100 * 200 / 2100.
        let comp = scored(&players, config, &[vec![0, 1], vec![2, 3]]).unwrap();
        assert!((comp.balance_diff_pct - 100.0 * 200.0 / 2100.0).abs() < 1e-9);
    }

    #[test]
    fn test_spread_is_team_order_invariant() {
        let players = solo_pool(&[1000.0, 1200.0, 1400.0, 1600.0]);
        let config = RatingConfig::default().with_weights(1.0, 0.0);

        let a = scored(&players, config.clone(), &[vec![0, 1], vec![2, 3]]).unwrap();
        let b = scored(&players, config, &[vec![2, 3], vec![0, 1]]).unwrap();
        assert_eq!(a.balance_diff_pct, b.balance_diff_pct);
        assert_eq!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn test_single_team_has_zero_spread() {
        let players = solo_pool(&[900.0, 1500.0]);
        let comp = scored(
            &players,
            RatingConfig::default(),
            &[vec![0, 1]],
        )
        .unwrap();
        assert_eq!(comp.balance_diff_pct, 0.0);
    }

    #[test]
    fn test_violations_sum_across_teams() {
        let players: Vec<Player> = (0..4)
            .map(|i| {
                Player::new(i)
                    .with_solo_rating(1000.0)
                    .with_preference(Preference::Pocket)
            })
            .collect();

        // Each two-player team has one pocket seat, so each team
        // forces one violation.
        let comp = scored(
            &players,
            RatingConfig::default(),
            &[vec![0, 1], vec![2, 3]],
        )
        .unwrap();
        assert_eq!(comp.violations, 2);
    }

    #[test]
    fn test_seat_strengths_follow_the_table() {
        let players = vec![
            Player::new(0)
                .with_solo_rating(1000.0)
                .with_team_rating(1000.0)
                .with_preference(Preference::Flank),
            Player::new(1)
                .with_solo_rating(1000.0)
                .with_team_rating(1000.0),
        ];
        let comp = scored(
            &players,
            RatingConfig::default(),
            &[vec![0, 1]],
        )
        .unwrap();

        let team = &comp.teams[0];
        assert_eq!(team.members[0].player, PlayerId(0));
        assert_eq!(team.members[0].position, Position::Flank);
        assert!((team.members[0].strength - 1100.0).abs() < 1e-9);
        assert_eq!(team.members[1].position, Position::Pocket);
        assert!((team.members[1].strength - 1000.0).abs() < 1e-9);
        assert!((team.total_strength - 2100.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_pool_is_an_error() {
        // Unrated pool with a zero neutral rating: no usable strength.
        let players: Vec<Player> = (0..4).map(Player::new).collect();
        let config = RatingConfig::default().with_neutral_rating(0.0);

        let err = scored(&players, config, &[vec![0, 1], vec![2, 3]]).unwrap_err();
        assert_eq!(err, BalanceError::DegenerateInput { team: 0 });
    }

    #[test]
    fn test_team_ids_match_partition() {
        let players = solo_pool(&[1.0, 2.0, 3.0, 4.0]);
        let comp = scored(
            &players,
            RatingConfig::default(),
            &[vec![0, 2], vec![1, 3]],
        )
        .unwrap();
        assert_eq!(
            comp.team_ids(),
            vec![
                vec![PlayerId(0), PlayerId(2)],
                vec![PlayerId(1), PlayerId(3)],
            ]
        );
    }

    #[test]
    #[should_panic(expected = "strength table must cover the pool")]
    fn test_panics_on_table_mismatch() {
        let players = solo_pool(&[1000.0, 1000.0]);
        let table = RatingNormalizer::new(RatingConfig::default())
            .unwrap()
            .table(&players[..1]);
        CompositionScorer::new(&players, &table);
    }
}
