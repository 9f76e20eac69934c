//! League Model - roster configuration and weekly roster data
//!
//! This crate holds the league slot configuration and the read-only
//! player/team records the lineup and efficiency engines consume.

pub mod error;
pub mod slots;
pub mod types;

pub use error::ModelError;
pub use slots::{
    RosterSlotModel, BENCH_SLOT, DEFENSIVE_FLEX_POSITIONS, DEFENSIVE_FLEX_SLOT,
    INJURED_RESERVE_SLOT,
};
pub use types::{Player, TeamWeek};
