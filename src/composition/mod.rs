//! Seated, scored candidate splits.
//!
//! A [`Composition`] is one partition made concrete: every member
//! seated, team strengths totalled, the inter-team spread expressed as
//! a percentage, and a teammate-pair [`Fingerprint`] attached for
//! diversity comparison. Compositions are immutable once scored.
//!
//! [`CompositionScorer`] turns raw partitions into compositions against
//! a fixed pool and strength table.

mod scorer;
mod types;

pub use scorer::CompositionScorer;
pub use types::{Composition, Fingerprint, SeatedPlayer, Team};
