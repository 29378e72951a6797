//! Greedy two-pass seat assignment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::player::{Player, Position, Preference};

/// Seat plan for one team: how many of each position to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotPlan {
    pub flanks: usize,
    pub pockets: usize,
}

impl SlotPlan {
    pub fn new(flanks: usize, pockets: usize) -> Self {
        Self { flanks, pockets }
    }

    /// Total seats in the plan.
    pub fn size(&self) -> usize {
        self.flanks + self.pockets
    }
}

/// Default plan for a team of `size`: flanks take the odd seat.
pub fn default_slots(size: usize) -> SlotPlan {
    SlotPlan {
        flanks: (size + 1) / 2,
        pockets: size / 2,
    }
}

/// One seated team member, identified by pool index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Seat {
    /// Index into the pool slice passed to [`assign`].
    pub player: usize,
    pub position: Position,
}

/// Seating outcome for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// One seat per member, ordered by pool index.
    pub seats: Vec<Seat>,
    /// Members seated against a stated preference.
    pub violations: usize,
}

/// Seats `team` into `slots`.
///
/// Pass 1 walks members in player-id order and grants stated
/// preferences while seats of that kind remain. Pass 2 fills what is
/// left: players without a stated leaning first, then the overflow,
/// which lands on off seats and counts one violation each. Unstated
/// players can never take a seat away from a stated preference.
///
/// The result depends only on the inputs; member order in `team` is
/// irrelevant.
///
/// # Panics
///
/// Panics if the team size does not match the plan, or if a team entry
/// does not index into `players`.
pub fn assign(team: &[usize], players: &[Player], slots: SlotPlan) -> Assignment {
    assert_eq!(
        team.len(),
        slots.size(),
        "team size must match the slot plan"
    );

    let mut order: Vec<usize> = team.to_vec();
    order.sort_by_key(|&i| (players[i].id, i));

    let mut flanks_left = slots.flanks;
    let mut pockets_left = slots.pockets;
    let mut seats: Vec<Seat> = Vec::with_capacity(team.len());
    let mut unstated: Vec<usize> = Vec::new();
    let mut overflow: Vec<usize> = Vec::new();
    let mut violations = 0;

    // pass 1: stated preferences, while their seat kind lasts
    for &idx in &order {
        match players[idx].preference {
            Preference::Flank if flanks_left > 0 => {
                flanks_left -= 1;
                seats.push(Seat {
                    player: idx,
                    position: Position::Flank,
                });
            }
            Preference::Pocket if pockets_left > 0 => {
                pockets_left -= 1;
                seats.push(Seat {
                    player: idx,
                    position: Position::Pocket,
                });
            }
            Preference::Any => unstated.push(idx),
            _ => overflow.push(idx),
        }
    }

    // pass 2: remaining seats, unstated players first
    for &idx in unstated.iter().chain(&overflow) {
        let position = if flanks_left > 0 {
            flanks_left -= 1;
            Position::Flank
        } else {
            pockets_left -= 1;
            Position::Pocket
        };
        if !players[idx].preference.accepts(position) {
            violations += 1;
        }
        seats.push(Seat {
            player: idx,
            position,
        });
    }

    seats.sort_by_key(|s| s.player);
    Assignment { seats, violations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    fn pool(preferences: &[Preference]) -> Vec<Player> {
        preferences
            .iter()
            .enumerate()
            .map(|(i, &p)| Player::new(i as u64).with_preference(p))
            .collect()
    }

    fn position_of(assignment: &Assignment, player: usize) -> Position {
        assignment
            .seats
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.position)
            .unwrap()
    }

    #[test]
    fn test_default_slots() {
        assert_eq!(default_slots(1), SlotPlan::new(1, 0));
        assert_eq!(default_slots(2), SlotPlan::new(1, 1));
        assert_eq!(default_slots(3), SlotPlan::new(2, 1));
        assert_eq!(default_slots(4), SlotPlan::new(2, 2));
        assert_eq!(default_slots(5), SlotPlan::new(3, 2));
    }

    #[test]
    fn test_compatible_preferences_all_granted() {
        let players = pool(&[Preference::Flank, Preference::Pocket]);
        let a = assign(&[0, 1], &players, default_slots(2));

        assert_eq!(a.violations, 0);
        assert_eq!(position_of(&a, 0), Position::Flank);
        assert_eq!(position_of(&a, 1), Position::Pocket);
    }

    #[test]
    fn test_conflicting_preferences_lower_id_wins() {
        let players = pool(&[Preference::Pocket, Preference::Pocket]);
        let a = assign(&[0, 1], &players, default_slots(2));

        assert_eq!(a.violations, 1);
        assert_eq!(position_of(&a, 0), Position::Pocket);
        assert_eq!(position_of(&a, 1), Position::Flank);
    }

    #[test]
    fn test_unstated_never_steals_a_stated_seat() {
        // Pool order puts the unstated player first; the flank seat
        // must still go to the player who asked for it.
        let players = pool(&[Preference::Any, Preference::Flank]);
        let a = assign(&[0, 1], &players, default_slots(2));

        assert_eq!(a.violations, 0);
        assert_eq!(position_of(&a, 1), Position::Flank);
        assert_eq!(position_of(&a, 0), Position::Pocket);
    }

    #[test]
    fn test_member_order_is_irrelevant() {
        let players = pool(&[
            Preference::Pocket,
            Preference::Any,
            Preference::Flank,
            Preference::Pocket,
        ]);
        let forward = assign(&[0, 1, 2, 3], &players, default_slots(4));
        let shuffled = assign(&[3, 1, 0, 2], &players, default_slots(4));
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_idempotent() {
        let players = pool(&[Preference::Flank, Preference::Flank, Preference::Any]);
        let first = assign(&[0, 1, 2], &players, default_slots(3));
        let second = assign(&[0, 1, 2], &players, default_slots(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_pocket_on_odd_team() {
        let players = pool(&[Preference::Pocket, Preference::Pocket, Preference::Pocket]);
        // Plan is 2 flanks, 1 pocket: two forced violations.
        let a = assign(&[0, 1, 2], &players, default_slots(3));

        assert_eq!(a.violations, 2);
        assert_eq!(position_of(&a, 0), Position::Pocket);
        assert_eq!(position_of(&a, 1), Position::Flank);
        assert_eq!(position_of(&a, 2), Position::Flank);
    }

    #[test]
    fn test_violations_never_exceed_team_size() {
        let players = pool(&[
            Preference::Flank,
            Preference::Flank,
            Preference::Flank,
            Preference::Flank,
        ]);
        let a = assign(&[0, 1, 2, 3], &players, default_slots(4));
        assert_eq!(a.violations, 2);
        assert!(a.violations <= 4);
    }

    #[test]
    fn test_assignment_uses_player_ids_not_pool_order() {
        // Same preferences, but ids reversed relative to pool order:
        // the seat grant must follow ids.
        let players = vec![
            Player::new(9).with_preference(Preference::Pocket),
            Player::new(1).with_preference(Preference::Pocket),
        ];
        let a = assign(&[0, 1], &players, default_slots(2));

        // Player id 1 (pool index 1) asked first by id order.
        assert_eq!(players[1].id, PlayerId(1));
        assert_eq!(position_of(&a, 1), Position::Pocket);
        assert_eq!(position_of(&a, 0), Position::Flank);
        assert_eq!(a.violations, 1);
    }

    #[test]
    #[should_panic(expected = "team size must match the slot plan")]
    fn test_panics_on_plan_mismatch() {
        let players = pool(&[Preference::Any, Preference::Any]);
        assign(&[0, 1], &players, SlotPlan::new(2, 1));
    }

    #[test]
    fn test_seats_ordered_by_pool_index() {
        let players = pool(&[Preference::Any, Preference::Any, Preference::Any]);
        let a = assign(&[2, 0, 1], &players, default_slots(3));
        let indices: Vec<usize> = a.seats.iter().map(|s| s.player).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
