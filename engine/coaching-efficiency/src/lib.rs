//! Coaching Efficiency - how well each manager set their weekly lineup
//!
//! Compares a team's actual weekly score against the best lineup its roster
//! could have fielded and applies the league's disqualification policy:
//! manual overrides, incomplete active rosters, and managers who benched too
//! many startable players.

pub mod config;
pub mod engine;
pub mod records;


pub use config::EfficiencySettings;
pub use engine::CoachingEfficiencyEngine;
pub use records::{Disqualification, EfficiencyResult, RunReport};
