//! Deterministic top-N selection.
//!
//! Ranks scored compositions by balance spread, then violations, then
//! fingerprint, and keeps the best few that are meaningfully different
//! from each other. The candidate stream is examined under a hard work
//! bound; when the bound cuts the stream short the result says so
//! instead of failing.
//!
//! # Key Types
//!
//! - [`SelectorConfig`]: limit, diversity threshold, work bound
//! - [`TopNSelector`]: the ranking and filtering pass
//! - [`Selection`]: chosen compositions plus run statistics

mod config;
mod selector;

pub use config::SelectorConfig;
pub use selector::{Selection, TopNSelector};
