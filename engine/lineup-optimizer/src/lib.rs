//! Lineup Optimizer - best legal lineup for a weekly roster
//!
//! Classifies every rostered player by the slots they could start in, then
//! greedily fills fixed slots by top score and reconciles flex slots against
//! players already consumed. Pure computation over `league-model` records.

pub mod eligibility;
pub mod optimal;

pub use eligibility::eligible_slots;
pub use optimal::{select, OptimalLineup};
