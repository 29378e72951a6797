//! Top-level balancing runner.
//!
//! Wires the pipeline end to end: rating normalization produces a
//! strength table, partition enumeration walks candidate team splits,
//! each split is scored into a composition, and ranked selection keeps
//! the best few. [`Balancer`] owns the configured stages; callers hand
//! it a player pool and a team size and get a [`BalanceResult`] back.
//!
//! # Key Types
//!
//! - [`BalanceConfig`]: stage configs plus execution toggles
//! - [`Balancer`]: the entry point
//! - [`BalanceResult`]: selected compositions and run statistics

mod config;
mod runner;

pub use config::BalanceConfig;
pub use runner::{BalanceResult, Balancer};
