//! Coaching efficiency evaluation
//!
//! One evaluation per team per week: score the best possible lineup, divide
//! the actual score by it, then apply the disqualification policy. The
//! engine holds only the immutable slot model and settings, so evaluations
//! are idempotent and safe to run concurrently across teams and weeks.

use crate::config::EfficiencySettings;
use crate::records::{Disqualification, EfficiencyResult, RunReport};
use chrono::Utc;
use league_model::{Player, RosterSlotModel, TeamWeek};
use lineup_optimizer::select;
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct CoachingEfficiencyEngine {
    model: RosterSlotModel,
    settings: EfficiencySettings,
}

impl CoachingEfficiencyEngine {
    pub fn new(model: RosterSlotModel, settings: EfficiencySettings) -> Self {
        Self { model, settings }
    }

    pub fn model(&self) -> &RosterSlotModel {
        &self.model
    }

    /// Evaluate one team-week.
    pub fn evaluate(&self, team_week: &TeamWeek) -> EfficiencyResult {
        let optimal = select(&team_week.players, &self.model);
        let optimal_points = optimal.total_points();

        let mut efficiency = if optimal_points == 0.0 {
            0.0
        } else {
            team_week.actual_points / optimal_points * 100.0
        };

        let disqualification = self.disqualify(team_week);
        if let Some(dq) = &disqualification {
            warn!(
                "{} disqualified for week {} ({:?}), efficiency zeroed",
                team_week.team_name, team_week.week, dq
            );
            efficiency = 0.0;
        } else {
            debug!(
                "{} week {}: {:.2} actual / {:.2} optimal = {:.1}%",
                team_week.team_name, team_week.week, team_week.actual_points, optimal_points,
                efficiency
            );
        }

        EfficiencyResult {
            team_name: team_week.team_name.clone(),
            week: team_week.week,
            efficiency,
            actual_points: team_week.actual_points,
            optimal_points,
            disqualification,
            evaluated_at: Utc::now(),
        }
    }

    /// Evaluate every team-week and accumulate the run report for the
    /// downstream reporter.
    pub fn evaluate_league(&self, team_weeks: &[TeamWeek]) -> (Vec<EfficiencyResult>, RunReport) {
        let mut report = RunReport::new();
        let results: Vec<EfficiencyResult> = team_weeks
            .iter()
            .map(|team_week| {
                let result = self.evaluate(team_week);
                report.record(&result);
                result
            })
            .collect();
        (results, report)
    }

    fn disqualify(&self, team_week: &TeamWeek) -> Option<Disqualification> {
        // Manual overrides apply unconditionally, ahead of every other check.
        if self.settings.disqualified_teams.contains(&team_week.team_name) {
            return Some(Disqualification::ManualOverride);
        }

        if !self.settings.disqualification_enabled {
            return None;
        }

        // An incomplete active lineup disqualifies outright, before any
        // bench accounting.
        let expected = self.model.active_slot_composition();
        if !same_composition(&expected, &team_week.filled_active_slots) {
            return Some(Disqualification::IncompleteActiveRoster);
        }

        let ineligible = team_week
            .players
            .iter()
            .filter(|player| player.is_benched())
            .filter(|player| self.is_unstartable(player, team_week.week))
            .count() as u32;

        let threshold = self.model.bench_capacity().div_ceil(2);
        if ineligible >= threshold {
            return Some(Disqualification::IneligibleBenchPlayers { count: ineligible });
        }

        None
    }

    /// A benched player counts against the manager when they could not have
    /// started anyway: prohibited status or on bye this week.
    fn is_unstartable(&self, player: &Player, week: u32) -> bool {
        let prohibited = player
            .status
            .as_deref()
            .is_some_and(|status| self.settings.prohibited_statuses.contains(status));
        prohibited || player.bye_week == Some(week)
    }
}

/// Multiset equality over slot names. A malformed filled composition can
/// only ever fail the comparison, which downgrades to an
/// incomplete-active-roster disqualification rather than an error.
fn same_composition(expected: &[String], filled: &[String]) -> bool {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for slot in expected {
        *counts.entry(slot.as_str()).or_default() += 1;
    }
    for slot in filled {
        *counts.entry(slot.as_str()).or_default() -= 1;
    }
    counts.values().all(|&count| count == 0)
}
