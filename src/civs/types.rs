use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SuggestError;
use crate::player::{PlayerId, Position};

/// Tier ratings a faction holds on one map, split by position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct MapTiers {
    flank: Option<f64>,
    pocket: Option<f64>,
}

impl MapTiers {
    fn get(&self, position: Position) -> Option<f64> {
        match position {
            Position::Flank => self.flank,
            Position::Pocket => self.pocket,
        }
    }

    fn set(&mut self, position: Position, rating: f64) {
        match position {
            Position::Flank => self.flank = Some(rating),
            Position::Pocket => self.pocket = Some(rating),
        }
    }
}

/// Static knowledge about one faction.
///
/// Tier ratings are per (position, map) desirability scores on whatever
/// scale the caller's data uses; ratings missing from the profile fall
/// back to [`SuggestConfig::default_tier`](crate::civs::SuggestConfig).
/// Synergy weights reward pairing with specific teammate factions and
/// counter weights reward picking into specific opponent factions; both
/// default to zero for unlisted factions.
///
/// ```
/// use teamcomp::civs::CivilizationProfile;
/// use teamcomp::player::Position;
///
/// let franks = CivilizationProfile::new("Franks")
///     .with_tier(Position::Pocket, "arabia", 9.0)
///     .with_tier(Position::Flank, "arabia", 6.0)
///     .with_synergy("Huns", 1.5);
///
/// assert_eq!(franks.tier(Position::Pocket, "arabia"), Some(9.0));
/// assert_eq!(franks.tier(Position::Pocket, "islands"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilizationProfile {
    name: String,
    tiers: HashMap<String, MapTiers>,
    synergies: HashMap<String, f64>,
    counters: HashMap<String, f64>,
}

impl CivilizationProfile {
    /// Creates an empty profile for the named faction.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tiers: HashMap::new(),
            synergies: HashMap::new(),
            counters: HashMap::new(),
        }
    }

    /// Sets the tier rating for one position on one map.
    pub fn with_tier(mut self, position: Position, map: impl Into<String>, rating: f64) -> Self {
        self.tiers.entry(map.into()).or_default().set(position, rating);
        self
    }

    /// Sets the synergy weight toward another faction on the same team.
    pub fn with_synergy(mut self, other: impl Into<String>, weight: f64) -> Self {
        self.synergies.insert(other.into(), weight);
        self
    }

    /// Sets the counter weight against another faction on the enemy team.
    pub fn with_counter(mut self, other: impl Into<String>, weight: f64) -> Self {
        self.counters.insert(other.into(), weight);
        self
    }

    /// Faction name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tier rating at `(position, map)`, if the profile carries one.
    pub fn tier(&self, position: Position, map: &str) -> Option<f64> {
        self.tiers.get(map).and_then(|t| t.get(position))
    }

    /// Synergy weight toward `other`, if listed.
    pub fn synergy(&self, other: &str) -> Option<f64> {
        self.synergies.get(other).copied()
    }

    /// Counter weight against `other`, if listed.
    pub fn counter(&self, other: &str) -> Option<f64> {
        self.counters.get(other).copied()
    }

    /// Whether the profile rates the map at all, on either position.
    pub fn rates_map(&self, map: &str) -> bool {
        self.tiers.contains_key(map)
    }
}

/// Read-only collection of faction profiles.
///
/// Construction rejects duplicate faction names so lookups and
/// draft-time pick deduplication stay unambiguous.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivLibrary {
    profiles: Vec<CivilizationProfile>,
}

impl CivLibrary {
    /// Builds a library from profiles, rejecting duplicate names.
    pub fn new(profiles: Vec<CivilizationProfile>) -> Result<Self, SuggestError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.name().to_string()) {
                return Err(SuggestError::InvalidConfiguration(format!(
                    "duplicate faction name: {}",
                    profile.name()
                )));
            }
        }
        Ok(Self { profiles })
    }

    /// Number of factions in the library.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the library holds no factions.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Looks up a faction by name.
    pub fn get(&self, name: &str) -> Option<&CivilizationProfile> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    /// Iterates all profiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CivilizationProfile> {
        self.profiles.iter()
    }

    /// Whether any faction rates the map on any position.
    pub fn rates_map(&self, map: &str) -> bool {
        self.profiles.iter().any(|p| p.rates_map(map))
    }
}

/// One ranked faction recommendation with its score breakdown.
///
/// The breakdown fields hold the raw term values before weighting so
/// callers can explain a recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactionCandidate {
    /// Faction name.
    pub faction: String,
    /// Weighted sum of the four terms below.
    pub score: f64,
    /// Tier rating at the seat's position and map, or the configured default.
    pub tier: f64,
    /// Mean synergy weight toward the known teammate factions.
    pub synergy: f64,
    /// Mean counter weight against the known opponent factions.
    pub counter: f64,
    /// Preference term, `1 / (rank + 1)` over the player's list, 0 when absent.
    pub preference: f64,
}

/// Suggestion for one seat inside a team draft.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeatSuggestion {
    /// Player occupying the seat.
    pub player: PlayerId,
    /// Index of the player's team within the composition.
    pub team: usize,
    /// Position the seat was assigned.
    pub position: Position,
    /// Every library faction ranked for this seat, best first.
    pub ranked: Vec<FactionCandidate>,
    /// Best-ranked faction no teammate has already taken, if any remains.
    pub pick: Option<String>,
}
