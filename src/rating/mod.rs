//! Rating normalization.
//!
//! Collapses a player's mixed rating signals into a single positional
//! strength score. The score is the weighted solo/team rating base,
//! scaled by a position factor (does the seat match the stated
//! preference?) and a bounded historical win-rate nudge.
//!
//! # Key Types
//!
//! - [`RatingConfig`]: weights, neutral fallback, factor bands
//! - [`RatingNormalizer`]: computes positional strength scores
//! - [`StrengthTable`]: precomputed scores for a whole pool
//!
//! Scoring is pure: the same player, position, and config always
//! produce the same score.

mod config;
mod normalizer;

pub use config::RatingConfig;
pub use normalizer::{RatingNormalizer, StrengthTable};
