//! Optimal lineup selection
//!
//! Greedy assignment with flex reconciliation: fixed slots take their top
//! scorers first, then each flex slot takes the best remaining players from
//! its bucket. Player IDs consumed by earlier slots are subtracted before a
//! flex slot picks, so no player lands in more than one slot even when a
//! league defines overlapping flex groups.

use crate::eligibility::eligible_slots;
use league_model::{Player, RosterSlotModel};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// The maximum-scoring legal assignment of a roster to the league's slots.
#[derive(Debug, Clone, Serialize)]
pub struct OptimalLineup {
    assignments: BTreeMap<String, Vec<Player>>,
    total_points: f64,
}

impl OptimalLineup {
    /// Assigned players per slot name. Slots the roster could not fill are
    /// short or absent; that is a valid partial lineup, not an error.
    pub fn assignments(&self) -> &BTreeMap<String, Vec<Player>> {
        &self.assignments
    }

    /// Players assigned to `slot`, empty when the slot went unfilled.
    pub fn slot(&self, slot: &str) -> &[Player] {
        self.assignments.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every assigned player across all slots.
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.assignments.values().flatten()
    }

    /// Sum of points over all assigned players.
    pub fn total_points(&self) -> f64 {
        self.total_points
    }
}

/// Select the optimal lineup for `players` under `model`.
pub fn select(players: &[Player], model: &RosterSlotModel) -> OptimalLineup {
    // Bucket every player into every slot it could start in. Bucket order
    // follows roster order, so stable sorting keeps the "any order" tie
    // policy deterministic.
    let mut buckets: BTreeMap<String, Vec<&Player>> = BTreeMap::new();
    for player in players {
        for slot in eligible_slots(player, model) {
            buckets.entry(slot).or_default().push(player);
        }
    }

    let mut assignments: BTreeMap<String, Vec<Player>> = BTreeMap::new();
    let mut used: HashSet<&str> = HashSet::new();

    // Fixed slots take their top scorers outright.
    for (slot, &count) in model.slot_counts() {
        if model.is_bench_slot(slot) || model.is_flex_slot(slot) {
            continue;
        }
        let picked = take_best(&buckets, slot, count, &mut used);
        if !picked.is_empty() {
            assignments.insert(slot.clone(), picked);
        }
    }

    // Flex slots pick from whoever their base positions left behind.
    for flex_slot in model.flex_groups().keys() {
        let count = model.slot_counts().get(flex_slot).copied().unwrap_or(0);
        let picked = take_best(&buckets, flex_slot, count, &mut used);
        if !picked.is_empty() {
            assignments.insert(flex_slot.clone(), picked);
        }
    }

    let total_points: f64 = assignments.values().flatten().map(|player| player.points).sum();
    debug!(
        "optimal lineup: {} players across {} slots for {:.2} points",
        assignments.values().map(Vec::len).sum::<usize>(),
        assignments.len(),
        total_points
    );

    OptimalLineup { assignments, total_points }
}

/// Top `count` unconsumed players from `slot`'s bucket, by points
/// descending. Ties keep roster encounter order (stable sort). Consumed
/// player IDs are added to `used`.
fn take_best<'a>(
    buckets: &BTreeMap<String, Vec<&'a Player>>,
    slot: &str,
    count: u32,
    used: &mut HashSet<&'a str>,
) -> Vec<Player> {
    let mut candidates: Vec<&Player> = buckets.get(slot).cloned().unwrap_or_default();
    candidates.retain(|player| !used.contains(player.player_id.as_str()));
    candidates.sort_by(|a, b| {
        b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal)
    });
    candidates.truncate(count as usize);

    for player in &candidates {
        used.insert(player.player_id.as_str());
    }
    candidates.into_iter().cloned().collect()
}
