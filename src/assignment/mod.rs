//! Position assignment.
//!
//! Seats a team's members into flank and pocket slots. Stated
//! preferences are granted first; whoever cannot be accommodated is
//! seated anyway and counted as a violation, so the search can trade
//! seat comfort against skill balance instead of rejecting splits.
//!
//! # Key Types
//!
//! - [`SlotPlan`]: how many seats of each kind a team fills
//! - [`assign`]: the two-pass greedy assigner
//! - [`suggest_positions`]: roster-wide outlook, independent of any split

mod assigner;
mod outlook;

pub use assigner::{assign, default_slots, Assignment, Seat, SlotPlan};
pub use outlook::suggest_positions;
