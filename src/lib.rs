//! Deterministic team composition engine for team-versus-team lobbies.
//!
//! Turns a pool of rated players into balanced, position-assigned team
//! compositions:
//!
//! - **Rating**: Collapses solo/team ratings, stated position preference,
//!   and positional win history into one strength score per seat.
//! - **Partition**: Lazily enumerates every distinct split of the pool
//!   into unordered equal-size teams, each split exactly once.
//! - **Assignment**: Seats a team across flank and pocket slots, honoring
//!   stated preferences before filling leftover seats.
//! - **Composition**: Scores a seated split into team strength totals,
//!   the relative spread between strongest and weakest team, preference
//!   violations, and a teammate-pair fingerprint.
//! - **Selection**: Keeps the best few compositions under a hard work
//!   bound, filtering out near-duplicate splits.
//! - **Civs**: Ranks faction picks per seat from tier, synergy, counter,
//!   and player preference data.
//! - **Balancer**: End-to-end entry point wiring the stages above.
//!
//! Every stage is deterministic: the same pool and configuration always
//! produce the same compositions in the same order.
//!
//! # Examples
//!
//! ```
//! use teamcomp::balancer::{BalanceConfig, Balancer};
//! use teamcomp::player::Player;
//!
//! let players = vec![
//!     Player::new(1).with_solo_rating(1900.0).with_team_rating(2000.0),
//!     Player::new(2).with_solo_rating(1700.0).with_team_rating(1750.0),
//!     Player::new(3).with_solo_rating(1500.0).with_team_rating(1600.0),
//!     Player::new(4).with_solo_rating(1450.0).with_team_rating(1400.0),
//! ];
//!
//! let balancer = Balancer::new(BalanceConfig::default()).unwrap();
//! let result = balancer.balance(&players, 2).unwrap();
//!
//! let best = result.best().unwrap();
//! assert_eq!(best.teams.len(), 2);
//! println!("spread: {:.2}%", best.balance_diff_pct);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations on the public
//!   data model.
//! - `parallel`: scores candidate partitions on a rayon thread pool;
//!   results are identical to the sequential path.

pub mod assignment;
pub mod balancer;
pub mod civs;
pub mod composition;
pub mod error;
pub mod partition;
pub mod player;
pub mod rating;
pub mod selection;
