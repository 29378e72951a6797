//! Exhaustive team-split enumeration.
//!
//! [`PartitionIter`] lazily yields every distinct way to split a pool of
//! `N` players into unordered teams of equal size, each split exactly
//! once. The construction is purely structural: it works on player
//! indices and never touches ratings.
//!
//! The split count grows as `N! / (S!^K * K!)`, which stays tractable
//! for lobby-sized pools (5775 splits for 12 players into three teams
//! of four) but explodes beyond that. Callers bound the work by
//! stopping the iteration; [`partition_count`] gives the exact total
//! up front.

mod enumerator;

pub use enumerator::{partition_count, Partition, PartitionIter};
