//! Error types shared across the pipeline.
//!
//! Configuration problems surface at construction time (`Balancer::new`,
//! `CivilizationSuggester::new`), never in the middle of a run. Runtime
//! errors abort the whole call with no partial result.

use thiserror::Error;

use crate::player::Position;

/// Errors produced by the balancing pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The pool cannot form complete teams of the requested size.
    #[error("{players} players cannot form complete teams of {team_size}")]
    InvalidTeamSize { players: usize, team_size: usize },

    /// A team resolved to zero total strength, so relative balance
    /// percentages are undefined.
    #[error("team {team} has zero total strength")]
    DegenerateInput { team: usize },
}

/// Errors produced by the civilization suggestion engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuggestError {
    /// A configuration parameter is out of range, or the faction
    /// library is unusable (empty, duplicate names).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No faction profile carries a rating for this map.
    #[error("unknown map: {0}")]
    UnknownMap(String),

    /// The map is known, but no faction rates this position on it.
    #[error("no faction rates {position} on map {map}")]
    UnknownPosition { position: Position, map: String },
}
