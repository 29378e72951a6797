//! Civilization suggestions.
//!
//! Recommends a faction per assigned seat from a read-only knowledge
//! base: how strong each faction is at a position on a map (tier), how
//! well it pairs with teammate factions (synergy), how well it plays
//! into known opponent factions (counter), and where it sits in the
//! player's own preference list. The four terms combine as a weighted
//! sum; the full ranked list is returned so callers can truncate or
//! present alternatives.
//!
//! # Key Types
//!
//! - [`CivilizationProfile`] / [`CivLibrary`]: the knowledge base
//! - [`SuggestConfig`]: term weights and the missing-tier default
//! - [`CivilizationSuggester`]: per-seat ranking and team drafts

mod config;
mod suggester;
mod types;

pub use config::SuggestConfig;
pub use suggester::CivilizationSuggester;
pub use types::{CivLibrary, CivilizationProfile, FactionCandidate, SeatSuggestion};
