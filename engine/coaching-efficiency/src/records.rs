//! Evaluation outcomes and per-run disqualification accumulation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a team's efficiency was zeroed for the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disqualification {
    /// The manager left a mandatory active slot unfilled.
    IncompleteActiveRoster,

    /// The team was disqualified by run configuration.
    ManualOverride,

    /// Too many healthy, startable players sat on the bench.
    IneligibleBenchPlayers { count: u32 },
}

impl Disqualification {
    /// Numeric encoding the downstream report consumes: -1 for an
    /// incomplete active roster, -2 for a manual override, otherwise the
    /// ineligible bench player count.
    pub fn sentinel(&self) -> i64 {
        match self {
            Disqualification::IncompleteActiveRoster => -1,
            Disqualification::ManualOverride => -2,
            Disqualification::IneligibleBenchPlayers { count } => i64::from(*count),
        }
    }
}

/// Outcome of one team-week evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyResult {
    pub team_name: String,
    pub week: u32,

    /// Actual score over optimal score, as a percentage. Zero when the
    /// team was disqualified or its optimal total was zero. Values above
    /// 100 are legal and never clamped.
    pub efficiency: f64,

    pub actual_points: f64,
    pub optimal_points: f64,
    pub disqualification: Option<Disqualification>,
    pub evaluated_at: DateTime<Utc>,
}

impl EfficiencyResult {
    pub fn is_disqualified(&self) -> bool {
        self.disqualification.is_some()
    }
}

/// Disqualifications accumulated over one report run, keyed by team name.
///
/// The engine itself is stateless; the caller owns one of these per run and
/// merges partitions when evaluations fan out across threads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    disqualifications: BTreeMap<String, i64>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` if it carries a disqualification.
    pub fn record(&mut self, result: &EfficiencyResult) {
        if let Some(dq) = &result.disqualification {
            self.disqualifications.insert(result.team_name.clone(), dq.sentinel());
        }
    }

    /// Sentinel or ineligible-player count per disqualified team.
    pub fn disqualifications(&self) -> &BTreeMap<String, i64> {
        &self.disqualifications
    }

    pub fn disqualified_count(&self) -> usize {
        self.disqualifications.len()
    }

    /// Fold another partition's report into this one.
    pub fn merge(&mut self, other: RunReport) {
        self.disqualifications.extend(other.disqualifications);
    }
}
