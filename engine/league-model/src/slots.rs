//! League roster slot configuration
//!
//! A `RosterSlotModel` describes how many players a league starts at each
//! slot and which base positions each flex slot may absorb. It is built once
//! per league from the league settings and shared read-only after that.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Bench slot name.
pub const BENCH_SLOT: &str = "BN";

/// Injured reserve slot name.
pub const INJURED_RESERVE_SLOT: &str = "IR";

/// Name of the defensive flex slot synthesized for leagues that start
/// individual defensive players.
pub const DEFENSIVE_FLEX_SLOT: &str = "D";

/// Individual defensive positions that roll up into the defensive flex.
pub const DEFENSIVE_FLEX_POSITIONS: [&str; 7] = ["DB", "DL", "LB", "DT", "DE", "S", "CB"];

/// Slot configuration for a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSlotModel {
    /// Required player count per slot name (e.g. QB: 1, RB: 2, BN: 6).
    slot_counts: BTreeMap<String, u32>,

    /// Base positions each flex slot may absorb (e.g. FLEX: RB/WR/TE).
    flex_groups: BTreeMap<String, BTreeSet<String>>,

    /// Whether the defensive flex group was synthesized for this league.
    has_defensive_flex: bool,
}

impl RosterSlotModel {
    /// Build a slot model from league settings.
    ///
    /// A defensive flex group named `D` over `DB/DL/LB/DT/DE/S/CB` is added
    /// automatically when any of those positions appears in `slot_counts`.
    pub fn new(
        slot_counts: BTreeMap<String, u32>,
        mut flex_groups: BTreeMap<String, BTreeSet<String>>,
    ) -> Result<Self, ModelError> {
        let has_defensive_flex = slot_counts
            .keys()
            .any(|slot| DEFENSIVE_FLEX_POSITIONS.contains(&slot.as_str()));

        if has_defensive_flex {
            flex_groups.insert(
                DEFENSIVE_FLEX_SLOT.to_string(),
                DEFENSIVE_FLEX_POSITIONS.iter().map(|p| (*p).to_string()).collect(),
            );
        }

        let model = Self { slot_counts, flex_groups, has_defensive_flex };
        model.validate()?;
        Ok(model)
    }

    /// The standard offensive flex base positions.
    pub fn standard_flex_bases() -> BTreeSet<String> {
        ["RB", "WR", "TE"].iter().map(|p| (*p).to_string()).collect()
    }

    /// Superflex base positions (offensive flex that also takes quarterbacks).
    pub fn super_flex_bases() -> BTreeSet<String> {
        ["QB", "RB", "WR", "TE"].iter().map(|p| (*p).to_string()).collect()
    }

    fn validate(&self) -> Result<(), ModelError> {
        for flex_slot in self.flex_groups.keys() {
            if !self.slot_counts.contains_key(flex_slot) {
                return Err(ModelError::FlexSlotWithoutCount { slot: flex_slot.clone() });
            }

            for (group, base_positions) in &self.flex_groups {
                if base_positions.contains(flex_slot) {
                    return Err(ModelError::NestedFlexSlot {
                        slot: flex_slot.clone(),
                        group: group.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Required player count per slot name.
    pub fn slot_counts(&self) -> &BTreeMap<String, u32> {
        &self.slot_counts
    }

    /// Base positions each flex slot may absorb.
    pub fn flex_groups(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.flex_groups
    }

    /// Whether this league starts individual defensive players.
    pub fn has_defensive_flex(&self) -> bool {
        self.has_defensive_flex
    }

    /// Bench and injured reserve never count toward the startable lineup.
    pub fn is_bench_slot(&self, slot: &str) -> bool {
        slot == BENCH_SLOT || slot == INJURED_RESERVE_SLOT
    }

    /// Whether `slot` is one of the league's flex slots.
    pub fn is_flex_slot(&self, slot: &str) -> bool {
        self.flex_groups.contains_key(slot)
    }

    /// Configured bench capacity, 0 when the league defines no bench.
    pub fn bench_capacity(&self) -> u32 {
        self.slot_counts.get(BENCH_SLOT).copied().unwrap_or(0)
    }

    /// The multiset of active slot names a complete lineup must fill,
    /// one entry per required player (bench and IR excluded).
    pub fn active_slot_composition(&self) -> Vec<String> {
        let mut composition = Vec::new();
        for (slot, &count) in &self.slot_counts {
            if self.is_bench_slot(slot) {
                continue;
            }
            for _ in 0..count {
                composition.push(slot.clone());
            }
        }
        composition
    }
}
