//! Canonical partition enumeration.

use crate::error::BalanceError;

/// One split of the pool: teams in canonical order.
///
/// Each inner vector holds player indices in ascending order; teams are
/// ordered by their first member. Every index in `0..N` appears exactly
/// once.
pub type Partition = Vec<Vec<usize>>;

/// Lazily enumerates every distinct partition exactly once.
///
/// Duplicate splits are avoided by construction instead of filtering:
/// the lowest unplaced index always anchors the next team, and the
/// anchor's teammates step through lexicographic combinations of the
/// remaining pool. The final team is forced, never enumerated.
///
/// The iterator is not restartable; create a fresh one per search.
/// Stopping early is always safe.
///
/// # Usage
///
/// ```
/// use teamcomp::partition::PartitionIter;
///
/// let splits: Vec<_> = PartitionIter::new(4, 2).unwrap().collect();
/// assert_eq!(splits.len(), 3);
/// assert_eq!(splits[0], vec![vec![0, 1], vec![2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionIter {
    player_count: usize,
    team_size: usize,
    team_count: usize,
    /// One level per non-final team, deepest last.
    levels: Vec<Level>,
    primed: bool,
    done: bool,
}

impl PartitionIter {
    /// Creates an enumerator for `player_count` players in teams of
    /// `team_size`.
    ///
    /// Returns [`BalanceError::InvalidTeamSize`] when the pool is empty,
    /// the team size is zero, or the pool does not divide evenly.
    pub fn new(player_count: usize, team_size: usize) -> Result<Self, BalanceError> {
        if team_size == 0 || player_count == 0 || player_count % team_size != 0 {
            return Err(BalanceError::InvalidTeamSize {
                players: player_count,
                team_size,
            });
        }
        let mut iter = Self {
            player_count,
            team_size,
            team_count: player_count / team_size,
            levels: Vec::new(),
            primed: false,
            done: false,
        };
        iter.refill();
        Ok(iter)
    }

    /// Pool remaining below the deepest level (the forced final team
    /// when all levels are present).
    fn remaining_pool(&self) -> Vec<usize> {
        match self.levels.last() {
            Some(level) => level.remainder(),
            None => (0..self.player_count).collect(),
        }
    }

    /// Pushes first-combination levels until all non-final teams exist.
    fn refill(&mut self) {
        while self.levels.len() + 1 < self.team_count {
            let pool = self.remaining_pool();
            self.levels.push(Level::first(pool, self.team_size));
        }
    }

    /// Steps to the next partition. Returns `false` when exhausted.
    fn advance(&mut self) -> bool {
        while let Some(level) = self.levels.last_mut() {
            if level.advance() {
                self.refill();
                return true;
            }
            self.levels.pop();
        }
        false
    }

    fn current(&self) -> Partition {
        let mut teams = Vec::with_capacity(self.team_count);
        for level in &self.levels {
            teams.push(level.team());
        }
        teams.push(self.remaining_pool());
        teams
    }
}

impl Iterator for PartitionIter {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.done {
            return None;
        }
        if self.primed {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.primed = true;
        }
        Some(self.current())
    }
}

/// Enumeration state for one non-final team.
#[derive(Debug, Clone)]
struct Level {
    /// Players unplaced when this team forms; `pool[0]` is the anchor.
    pool: Vec<usize>,
    /// Indices into `pool[1..]` choosing the anchor's teammates,
    /// strictly increasing.
    combo: Vec<usize>,
}

impl Level {
    fn first(pool: Vec<usize>, team_size: usize) -> Self {
        Self {
            combo: (0..team_size - 1).collect(),
            pool,
        }
    }

    /// Steps to the next lexicographic combination. Returns `false`
    /// when this level is exhausted.
    fn advance(&mut self) -> bool {
        let tail = self.pool.len() - 1;
        let k = self.combo.len();
        // rightmost slot that can still move right
        let slot = match (0..k).rev().find(|&i| self.combo[i] < tail - (k - i)) {
            Some(i) => i,
            None => return false,
        };
        self.combo[slot] += 1;
        for j in slot + 1..k {
            self.combo[j] = self.combo[j - 1] + 1;
        }
        true
    }

    fn team(&self) -> Vec<usize> {
        let mut team = Vec::with_capacity(self.combo.len() + 1);
        team.push(self.pool[0]);
        team.extend(self.combo.iter().map(|&c| self.pool[c + 1]));
        team
    }

    /// Tail players not chosen into this team.
    fn remainder(&self) -> Vec<usize> {
        let mut rest = Vec::with_capacity(self.pool.len() - 1 - self.combo.len());
        let mut chosen = self.combo.iter().peekable();
        for (i, &player) in self.pool[1..].iter().enumerate() {
            if chosen.peek() == Some(&&i) {
                chosen.next();
            } else {
                rest.push(player);
            }
        }
        rest
    }
}

/// Exact number of distinct partitions, `N! / (S!^K * K!)`.
///
/// `None` when the shape is invalid (empty pool, zero team size,
/// indivisible) or the count overflows `u128`.
pub fn partition_count(player_count: usize, team_size: usize) -> Option<u128> {
    if team_size == 0 || player_count == 0 || player_count % team_size != 0 {
        return None;
    }
    let team_count = player_count / team_size;
    let mut total: u128 = 1;
    // each anchor chooses its S-1 teammates from what is left
    for t in 0..team_count {
        let remaining = player_count - t * team_size;
        total = total.checked_mul(binomial(remaining - 1, team_size - 1)?)?;
    }
    Some(total)
}

fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return None;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        // exact at every step: result holds a binomial coefficient
        result = result.checked_mul((n - k + i) as u128)? / i as u128;
    }
    Some(result)
}
