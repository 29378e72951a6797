use std::collections::HashMap;

use crate::composition::Composition;
use crate::error::SuggestError;
use crate::player::{Player, PlayerId, Position};

use super::config::SuggestConfig;
use super::types::{CivLibrary, CivilizationProfile, FactionCandidate, SeatSuggestion};

/// Ranks factions for assigned seats from a [`CivLibrary`].
///
/// Each candidate's score is a weighted sum of four terms: the
/// faction's tier at the seat's position and map, its mean synergy
/// toward factions already picked on the same team, its mean counter
/// weight against known opponent factions, and the player's own
/// preference for it. Ties resolve by tier, then faction name, so
/// rankings are deterministic.
///
/// # Examples
///
/// ```
/// use teamcomp::civs::{CivLibrary, CivilizationProfile, CivilizationSuggester, SuggestConfig};
/// use teamcomp::player::Position;
///
/// let library = CivLibrary::new(vec![
///     CivilizationProfile::new("Mongols").with_tier(Position::Flank, "arabia", 9.0),
///     CivilizationProfile::new("Turks").with_tier(Position::Flank, "arabia", 7.0),
/// ])
/// .unwrap();
/// let suggester = CivilizationSuggester::new(library, SuggestConfig::default()).unwrap();
///
/// let ranked = suggester
///     .suggest(Position::Flank, "arabia", &[], &[], &[])
///     .unwrap();
/// assert_eq!(ranked[0].faction, "Mongols");
/// ```
#[derive(Debug, Clone)]
pub struct CivilizationSuggester {
    library: CivLibrary,
    config: SuggestConfig,
}

impl CivilizationSuggester {
    /// Creates a suggester over the given library.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::InvalidConfiguration`] when the config
    /// fails validation or the library holds no factions.
    pub fn new(library: CivLibrary, config: SuggestConfig) -> Result<Self, SuggestError> {
        config.validate().map_err(SuggestError::InvalidConfiguration)?;
        if library.is_empty() {
            return Err(SuggestError::InvalidConfiguration(
                "faction library must not be empty".to_string(),
            ));
        }
        Ok(Self { library, config })
    }

    /// Ranks every library faction for one seat, best first.
    ///
    /// `preferences` is the seat player's own faction list (most
    /// preferred first), `teammates` the factions already committed on
    /// the seat's team, and `opponents` the factions known on enemy
    /// teams. Names missing from the library contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::UnknownMap`] when no faction rates
    /// `map`, and [`SuggestError::UnknownPosition`] when the map is
    /// known but no faction rates it at `position`.
    pub fn suggest(
        &self,
        position: Position,
        map: &str,
        preferences: &[String],
        teammates: &[String],
        opponents: &[String],
    ) -> Result<Vec<FactionCandidate>, SuggestError> {
        if !self.library.rates_map(map) {
            return Err(SuggestError::UnknownMap(map.to_string()));
        }
        if !self.library.iter().any(|p| p.tier(position, map).is_some()) {
            return Err(SuggestError::UnknownPosition {
                position,
                map: map.to_string(),
            });
        }

        let mut candidates: Vec<FactionCandidate> = self
            .library
            .iter()
            .map(|profile| self.evaluate(profile, position, map, preferences, teammates, opponents))
            .collect();
        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.tier.total_cmp(&a.tier))
                .then_with(|| a.faction.cmp(&b.faction))
        });
        Ok(candidates)
    }

    /// Walks a composition team by team and suggests a faction per seat.
    ///
    /// Within a team, seats commit in order of how much faction
    /// preference data their players carry (ties by player id), so the
    /// strongest opinions pick first. Committed picks feed the synergy
    /// term of later teammates; picks from earlier teams feed the
    /// counter term of later teams. A seat's `pick` skips factions a
    /// teammate already took and is `None` once the team exhausts the
    /// library; opposing teams may mirror each other freely.
    ///
    /// # Errors
    ///
    /// Same conditions as [`suggest`](Self::suggest).
    ///
    /// # Panics
    ///
    /// Panics if the composition references a player absent from
    /// `players`.
    pub fn suggest_draft(
        &self,
        composition: &Composition,
        players: &[Player],
        map: &str,
    ) -> Result<Vec<SeatSuggestion>, SuggestError> {
        let by_id: HashMap<PlayerId, &Player> = players.iter().map(|p| (p.id, p)).collect();

        let mut suggestions = Vec::new();
        let mut opponents: Vec<String> = Vec::new();
        for (team_index, team) in composition.teams.iter().enumerate() {
            let mut seats: Vec<(&Player, Position)> = team
                .members
                .iter()
                .map(|seat| {
                    let player = *by_id
                        .get(&seat.player)
                        .expect("composition references a player missing from the pool");
                    (player, seat.position)
                })
                .collect();
            seats.sort_by(|a, b| {
                b.0.preferred_factions
                    .len()
                    .cmp(&a.0.preferred_factions.len())
                    .then_with(|| a.0.id.cmp(&b.0.id))
            });

            let mut picks: Vec<String> = Vec::new();
            for (player, position) in seats {
                let ranked =
                    self.suggest(position, map, &player.preferred_factions, &picks, &opponents)?;
                let pick = ranked
                    .iter()
                    .find(|c| !picks.contains(&c.faction))
                    .map(|c| c.faction.clone());
                if let Some(faction) = &pick {
                    picks.push(faction.clone());
                }
                log::trace!(
                    "draft: team {} player {} at {} picks {:?}",
                    team_index,
                    player.id,
                    position,
                    pick
                );
                suggestions.push(SeatSuggestion {
                    player: player.id,
                    team: team_index,
                    position,
                    ranked,
                    pick,
                });
            }
            opponents.extend(picks);
        }

        log::debug!(
            "draft on {}: {} seats suggested across {} teams",
            map,
            suggestions.len(),
            composition.teams.len()
        );
        Ok(suggestions)
    }

    fn evaluate(
        &self,
        profile: &CivilizationProfile,
        position: Position,
        map: &str,
        preferences: &[String],
        teammates: &[String],
        opponents: &[String],
    ) -> FactionCandidate {
        let tier = profile
            .tier(position, map)
            .unwrap_or(self.config.default_tier);
        let synergy = mean_weight(teammates, |name| profile.synergy(name));
        let counter = mean_weight(opponents, |name| profile.counter(name));
        let preference = preferences
            .iter()
            .position(|f| f == profile.name())
            .map_or(0.0, |rank| 1.0 / (rank as f64 + 1.0));

        FactionCandidate {
            faction: profile.name().to_string(),
            score: self.config.tier_weight * tier
                + self.config.synergy_weight * synergy
                + self.config.counter_weight * counter
                + self.config.preference_weight * preference,
            tier,
            synergy,
            counter,
            preference,
        }
    }
}

/// Mean of `weight` over `names`, treating unlisted names as zero.
/// An empty list yields zero rather than a degenerate mean.
fn mean_weight<F>(names: &[String], weight: F) -> f64
where
    F: Fn(&str) -> Option<f64>,
{
    if names.is_empty() {
        return 0.0;
    }
    let total: f64 = names.iter().map(|name| weight(name).unwrap_or(0.0)).sum();
    total / names.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::{Fingerprint, SeatedPlayer, Team};
    use proptest::prelude::*;

    fn library() -> CivLibrary {
        CivLibrary::new(vec![
            CivilizationProfile::new("Aztecs")
                .with_tier(Position::Flank, "arabia", 9.0)
                .with_tier(Position::Pocket, "arabia", 4.0)
                .with_counter("Franks", 2.0),
            CivilizationProfile::new("Britons")
                .with_tier(Position::Flank, "arabia", 8.0)
                .with_tier(Position::Flank, "islands", 9.0)
                .with_synergy("Franks", 1.0),
            CivilizationProfile::new("Celts").with_tier(Position::Flank, "arabia", 8.0),
            CivilizationProfile::new("Franks")
                .with_tier(Position::Pocket, "arabia", 9.0)
                .with_tier(Position::Flank, "arabia", 6.0)
                .with_synergy("Britons", 1.0),
            CivilizationProfile::new("Huns")
                .with_tier(Position::Pocket, "arabia", 8.0)
                .with_synergy("Franks", 2.0),
        ])
        .unwrap()
    }

    fn suggester() -> CivilizationSuggester {
        CivilizationSuggester::new(library(), SuggestConfig::default()).unwrap()
    }

    fn seated(id: u64, position: Position) -> SeatedPlayer {
        SeatedPlayer {
            player: PlayerId(id),
            position,
            strength: 1000.0,
        }
    }

    fn team(members: Vec<SeatedPlayer>) -> Team {
        let total_strength = members.iter().map(|m| m.strength).sum();
        Team {
            members,
            total_strength,
        }
    }

    fn composition(teams: Vec<Team>) -> Composition {
        let ids: Vec<Vec<PlayerId>> = teams
            .iter()
            .map(|t| t.members.iter().map(|m| m.player).collect())
            .collect();
        Composition {
            teams,
            balance_diff_pct: 0.0,
            violations: 0,
            fingerprint: Fingerprint::from_teams(&ids),
        }
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    // ---- construction ----

    #[test]
    fn test_new_rejects_empty_library() {
        let empty = CivLibrary::new(vec![]).unwrap();
        let result = CivilizationSuggester::new(empty, SuggestConfig::default());
        assert!(matches!(
            result,
            Err(SuggestError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SuggestConfig::default().with_tier_weight(-1.0);
        let result = CivilizationSuggester::new(library(), config);
        assert!(matches!(
            result,
            Err(SuggestError::InvalidConfiguration(_))
        ));
    }

    // ---- per-seat ranking ----

    #[test]
    fn test_ranks_by_tier() {
        let ranked = suggester()
            .suggest(Position::Flank, "arabia", &[], &[], &[])
            .unwrap();

        let names: Vec<&str> = ranked.iter().map(|c| c.faction.as_str()).collect();
        assert_eq!(names, ["Aztecs", "Britons", "Celts", "Franks", "Huns"]);
    }

    #[test]
    fn test_missing_tier_falls_back_to_default() {
        let ranked = suggester()
            .suggest(Position::Flank, "arabia", &[], &[], &[])
            .unwrap();

        let huns = ranked.iter().find(|c| c.faction == "Huns").unwrap();
        assert_eq!(huns.tier, 5.0);
    }

    #[test]
    fn test_equal_scores_tie_by_name() {
        let ranked = suggester()
            .suggest(Position::Flank, "arabia", &[], &[], &[])
            .unwrap();

        // Britons and Celts both sit at tier 8 with no other terms.
        assert_eq!(ranked[1].faction, "Britons");
        assert_eq!(ranked[2].faction, "Celts");
    }

    #[test]
    fn test_preference_outranks_equal_tier() {
        let ranked = suggester()
            .suggest(Position::Flank, "arabia", &strings(&["Celts"]), &[], &[])
            .unwrap();

        let celts = ranked.iter().position(|c| c.faction == "Celts").unwrap();
        let britons = ranked.iter().position(|c| c.faction == "Britons").unwrap();
        assert!(celts < britons);
        assert_eq!(ranked[celts].preference, 1.0);
        // Equal score against Aztecs resolves by tier.
        assert_eq!(ranked[0].faction, "Aztecs");
    }

    #[test]
    fn test_preference_decays_with_rank() {
        let ranked = suggester()
            .suggest(
                Position::Flank,
                "arabia",
                &strings(&["Celts", "Britons"]),
                &[],
                &[],
            )
            .unwrap();

        let celts = ranked.iter().find(|c| c.faction == "Celts").unwrap();
        let britons = ranked.iter().find(|c| c.faction == "Britons").unwrap();
        assert_eq!(celts.preference, 1.0);
        assert_eq!(britons.preference, 0.5);
    }

    #[test]
    fn test_synergy_rewards_team_pairing() {
        let config = SuggestConfig::default().with_synergy_weight(1.0);
        let suggester = CivilizationSuggester::new(library(), config).unwrap();

        let ranked = suggester
            .suggest(Position::Pocket, "arabia", &[], &strings(&["Franks"]), &[])
            .unwrap();

        // Huns (tier 8, synergy 2) overtake Franks (tier 9, no self synergy).
        assert_eq!(ranked[0].faction, "Huns");
        assert_eq!(ranked[0].synergy, 2.0);
        assert_eq!(ranked[0].score, 10.0);
    }

    #[test]
    fn test_counter_rewards_playing_into_opponents() {
        let config = SuggestConfig::default().with_counter_weight(1.0);
        let suggester = CivilizationSuggester::new(library(), config).unwrap();

        let ranked = suggester
            .suggest(
                Position::Flank,
                "arabia",
                &[],
                &[],
                &strings(&["Franks", "Huns"]),
            )
            .unwrap();

        let aztecs = &ranked[0];
        assert_eq!(aztecs.faction, "Aztecs");
        assert_eq!(aztecs.counter, 1.0);
        assert_eq!(aztecs.score, 10.0);
    }

    #[test]
    fn test_empty_context_terms_are_zero() {
        let ranked = suggester()
            .suggest(Position::Flank, "arabia", &[], &[], &[])
            .unwrap();

        for candidate in &ranked {
            assert_eq!(candidate.synergy, 0.0);
            assert_eq!(candidate.counter, 0.0);
            assert_eq!(candidate.preference, 0.0);
        }
    }

    #[test]
    fn test_score_breakdown_reconstructs_score() {
        let config = SuggestConfig::default();
        let suggester = CivilizationSuggester::new(library(), config.clone()).unwrap();

        let ranked = suggester
            .suggest(
                Position::Pocket,
                "arabia",
                &strings(&["Huns"]),
                &strings(&["Franks"]),
                &strings(&["Aztecs"]),
            )
            .unwrap();

        for candidate in &ranked {
            let expected = config.tier_weight * candidate.tier
                + config.synergy_weight * candidate.synergy
                + config.counter_weight * candidate.counter
                + config.preference_weight * candidate.preference;
            assert!((candidate.score - expected).abs() < 1e-12);
        }

        let huns = ranked.iter().find(|c| c.faction == "Huns").unwrap();
        assert!((huns.score - 9.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_map() {
        let result = suggester().suggest(Position::Flank, "black_forest", &[], &[], &[]);

        match result {
            Err(SuggestError::UnknownMap(map)) => assert_eq!(map, "black_forest"),
            other => panic!("expected UnknownMap, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_position_on_known_map() {
        // Only Britons rate islands, and only on flank.
        let result = suggester().suggest(Position::Pocket, "islands", &[], &[], &[]);

        match result {
            Err(SuggestError::UnknownPosition { position, map }) => {
                assert_eq!(position, Position::Pocket);
                assert_eq!(map, "islands");
            }
            other => panic!("expected UnknownPosition, got {:?}", other),
        }
    }

    // ---- team drafts ----

    #[test]
    fn test_draft_covers_every_seat_in_team_order() {
        let comp = composition(vec![
            team(vec![seated(0, Position::Flank), seated(1, Position::Pocket)]),
            team(vec![seated(2, Position::Flank), seated(3, Position::Pocket)]),
        ]);
        let players = vec![
            Player::new(0),
            Player::new(1).with_preferred_factions(["Franks", "Huns"]),
            Player::new(2),
            Player::new(3).with_preferred_factions(["Britons"]),
        ];

        let suggestions = suggester().suggest_draft(&comp, &players, "arabia").unwrap();

        assert_eq!(suggestions.len(), 4);
        let teams: Vec<usize> = suggestions.iter().map(|s| s.team).collect();
        assert_eq!(teams, [0, 0, 1, 1]);
        // Richer preference lists commit first within each team.
        let order: Vec<PlayerId> = suggestions.iter().map(|s| s.player).collect();
        assert_eq!(
            order,
            [PlayerId(1), PlayerId(0), PlayerId(3), PlayerId(2)]
        );
        for suggestion in &suggestions {
            assert_eq!(suggestion.ranked.len(), 5);
            assert!(suggestion.pick.is_some());
        }
    }

    #[test]
    fn test_draft_skips_teammate_picks() {
        let config = SuggestConfig::default().with_preference_weight(10.0);
        let suggester = CivilizationSuggester::new(library(), config).unwrap();

        let comp = composition(vec![team(vec![
            seated(0, Position::Flank),
            seated(1, Position::Pocket),
        ])]);
        let players = vec![
            Player::new(0).with_preferred_factions(["Franks"]),
            Player::new(1).with_preferred_factions(["Franks"]),
        ];

        let suggestions = suggester.suggest_draft(&comp, &players, "arabia").unwrap();

        assert_eq!(suggestions[0].pick, Some("Franks".to_string()));
        // The second seat still ranks Franks first but must pick elsewhere.
        assert_eq!(suggestions[1].ranked[0].faction, "Franks");
        assert_eq!(suggestions[1].pick, Some("Huns".to_string()));
    }

    #[test]
    fn test_draft_counts_prior_teams_as_opponents() {
        let config = SuggestConfig::default()
            .with_counter_weight(1.0)
            .with_preference_weight(10.0);
        let suggester = CivilizationSuggester::new(library(), config).unwrap();

        let comp = composition(vec![
            team(vec![seated(0, Position::Pocket)]),
            team(vec![seated(1, Position::Flank)]),
        ]);
        let players = vec![
            Player::new(0).with_preferred_factions(["Franks"]),
            Player::new(1),
        ];

        let suggestions = suggester.suggest_draft(&comp, &players, "arabia").unwrap();

        assert_eq!(suggestions[0].pick, Some("Franks".to_string()));
        let best = &suggestions[1].ranked[0];
        assert_eq!(best.faction, "Aztecs");
        assert_eq!(best.counter, 2.0);
        assert_eq!(suggestions[1].pick, Some("Aztecs".to_string()));
    }

    #[test]
    fn test_draft_pick_is_none_once_library_exhausted() {
        let tiny = CivLibrary::new(vec![CivilizationProfile::new("Goths")
            .with_tier(Position::Flank, "arabia", 7.0)
            .with_tier(Position::Pocket, "arabia", 7.0)])
        .unwrap();
        let suggester = CivilizationSuggester::new(tiny, SuggestConfig::default()).unwrap();

        let comp = composition(vec![team(vec![
            seated(0, Position::Flank),
            seated(1, Position::Pocket),
        ])]);
        let players = vec![Player::new(0), Player::new(1)];

        let suggestions = suggester.suggest_draft(&comp, &players, "arabia").unwrap();

        assert_eq!(suggestions[0].pick, Some("Goths".to_string()));
        assert_eq!(suggestions[1].pick, None);
        assert_eq!(suggestions[1].ranked.len(), 1);
    }

    #[test]
    fn test_draft_unknown_map_propagates() {
        let comp = composition(vec![team(vec![seated(0, Position::Flank)])]);
        let players = vec![Player::new(0)];

        let result = suggester().suggest_draft(&comp, &players, "black_forest");
        assert!(matches!(result, Err(SuggestError::UnknownMap(_))));
    }

    #[test]
    #[should_panic(expected = "missing from the pool")]
    fn test_draft_panics_on_missing_player() {
        let comp = composition(vec![team(vec![seated(9, Position::Flank)])]);
        let players = vec![Player::new(0)];

        let _ = suggester().suggest_draft(&comp, &players, "arabia");
    }

    // ---- properties ----

    proptest! {
        #[test]
        fn prop_preference_never_demotes(pick_index in 0usize..5) {
            let suggester = suggester();
            let baseline = suggester
                .suggest(Position::Flank, "arabia", &[], &[], &[])
                .unwrap();
            let name = baseline[pick_index].faction.clone();

            let preferred = suggester
                .suggest(Position::Flank, "arabia", &[name.clone()], &[], &[])
                .unwrap();

            let before = baseline.iter().position(|c| c.faction == name).unwrap();
            let after = preferred.iter().position(|c| c.faction == name).unwrap();
            prop_assert!(after <= before);
        }

        #[test]
        fn prop_draft_picks_unique_within_team(size in 1usize..=5) {
            let members: Vec<SeatedPlayer> = (0..size)
                .map(|i| {
                    let position = if i % 2 == 0 {
                        Position::Flank
                    } else {
                        Position::Pocket
                    };
                    seated(i as u64, position)
                })
                .collect();
            let players: Vec<Player> = (0..size).map(|i| Player::new(i as u64)).collect();
            let comp = composition(vec![team(members)]);

            let suggestions = suggester()
                .suggest_draft(&comp, &players, "arabia")
                .unwrap();

            let picks: Vec<&String> =
                suggestions.iter().filter_map(|s| s.pick.as_ref()).collect();
            let unique: std::collections::HashSet<&&String> = picks.iter().collect();
            prop_assert_eq!(picks.len(), size);
            prop_assert_eq!(unique.len(), size);
        }
    }
}
