//! Composition data model.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::player::{PlayerId, Position};

/// A player seated at a position, with the strength that scoring used.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeatedPlayer {
    pub player: PlayerId,
    pub position: Position,
    pub strength: f64,
}

/// One team inside a composition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    /// Seated members, in pool order.
    pub members: Vec<SeatedPlayer>,
    /// Sum of member strengths.
    pub total_strength: f64,
}

/// Canonical teammate-pair set.
///
/// Two compositions produce equal fingerprints exactly when their team
/// memberships are equal, regardless of team order or seating. The
/// derived ordering is lexicographic over the sorted pairs and serves
/// as the final ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fingerprint {
    pairs: Vec<(PlayerId, PlayerId)>,
}

impl Fingerprint {
    /// Builds the fingerprint of a team membership list.
    pub fn from_teams(teams: &[Vec<PlayerId>]) -> Self {
        let mut pairs = Vec::new();
        for team in teams {
            for (i, &a) in team.iter().enumerate() {
                for &b in &team[i + 1..] {
                    pairs.push(if a <= b { (a, b) } else { (b, a) });
                }
            }
        }
        pairs.sort_unstable();
        Self { pairs }
    }

    /// The sorted teammate pairs.
    pub fn pairs(&self) -> &[(PlayerId, PlayerId)] {
        &self.pairs
    }

    /// Fraction of teammate pairs shared with `other`, in `[0, 1]`.
    ///
    /// The larger pair set is the denominator. Fingerprints without
    /// pairs (teams of one) never overlap.
    pub fn overlap(&self, other: &Fingerprint) -> f64 {
        let denom = self.pairs.len().max(other.pairs.len());
        if denom == 0 {
            return 0.0;
        }
        let mut shared = 0usize;
        let (mut i, mut j) = (0, 0);
        while i < self.pairs.len() && j < other.pairs.len() {
            match self.pairs[i].cmp(&other.pairs[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared as f64 / denom as f64
    }
}

/// A fully seated, scored candidate split of the pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Composition {
    /// Teams in canonical order (lowest member first).
    pub teams: Vec<Team>,
    /// Relative strength spread over team totals:
    /// `100 * (max - min) / mean`. Lower is better; 0 means identical
    /// totals.
    pub balance_diff_pct: f64,
    /// Preference violations summed across all teams.
    pub violations: usize,
    /// Teammate-pair set for diversity filtering and tie-breaking.
    pub fingerprint: Fingerprint,
}

impl Composition {
    /// Whether the strength spread is within `threshold_pct`.
    pub fn is_balanced(&self, threshold_pct: f64) -> bool {
        self.balance_diff_pct <= threshold_pct
    }

    /// Player ids per team, without seat detail.
    pub fn team_ids(&self) -> Vec<Vec<PlayerId>> {
        self.teams
            .iter()
            .map(|t| t.members.iter().map(|m| m.player).collect())
            .collect()
    }
}
