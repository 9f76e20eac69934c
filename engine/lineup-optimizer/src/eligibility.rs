//! Per-player slot eligibility
//!
//! Derives the full set of lineup slots a player could have started in for
//! the week: direct positions plus every flex slot reachable through them.

use league_model::{Player, RosterSlotModel, DEFENSIVE_FLEX_SLOT};
use std::collections::BTreeSet;

/// Slots `player` may legally occupy under `model`.
///
/// Recomputed per call; a player none of the league's slots can take (e.g.
/// a kicker in a kickerless league) yields an empty set rather than an
/// error.
pub fn eligible_slots(player: &Player, model: &RosterSlotModel) -> BTreeSet<String> {
    let mut eligible = BTreeSet::new();

    for slot in model.slot_counts().keys() {
        if model.is_bench_slot(slot) {
            continue;
        }
        if !player.eligible_positions.iter().any(|position| position == slot) {
            continue;
        }

        // Defensive players arrive with "D" already listed among their raw
        // positions; only the individual defensive slots grant it, so a raw
        // "D" never maps onto the synthesized defensive flex directly.
        if !(model.has_defensive_flex() && slot == DEFENSIVE_FLEX_SLOT) {
            eligible.insert(slot.clone());
        }

        for (flex_slot, base_positions) in model.flex_groups() {
            if base_positions.contains(slot) {
                eligible.insert(flex_slot.clone());
            }
        }
    }

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn player(name: &str, positions: &[&str]) -> Player {
        Player {
            player_id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            points: 0.0,
            eligible_positions: positions.iter().map(|p| (*p).to_string()).collect(),
            status: None,
            bye_week: None,
            selected_position: "BN".to_string(),
        }
    }

    fn offensive_model() -> RosterSlotModel {
        let slot_counts: BTreeMap<String, u32> =
            [("QB", 1), ("RB", 2), ("WR", 2), ("TE", 1), ("FLEX", 1), ("BN", 6)]
                .iter()
                .map(|(slot, count)| ((*slot).to_string(), *count))
                .collect();
        let mut flex_groups = BTreeMap::new();
        flex_groups.insert("FLEX".to_string(), RosterSlotModel::standard_flex_bases());
        RosterSlotModel::new(slot_counts, flex_groups).unwrap()
    }

    fn defensive_model() -> RosterSlotModel {
        let slot_counts: BTreeMap<String, u32> =
            [("QB", 1), ("RB", 2), ("DB", 2), ("LB", 1), ("D", 1), ("BN", 4)]
                .iter()
                .map(|(slot, count)| ((*slot).to_string(), *count))
                .collect();
        RosterSlotModel::new(slot_counts, BTreeMap::new()).unwrap()
    }

    #[test]
    fn test_running_back_gains_flex() {
        let slots = eligible_slots(&player("Saquon Barkley", &["RB"]), &offensive_model());
        let expected: BTreeSet<String> = ["RB", "FLEX"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn test_quarterback_has_no_flex() {
        let slots = eligible_slots(&player("Josh Allen", &["QB"]), &offensive_model());
        let expected: BTreeSet<String> = ["QB"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn test_dual_position_adds_flex_once() {
        let slots = eligible_slots(&player("Taysom Hill", &["TE", "RB"]), &offensive_model());
        assert_eq!(slots.iter().filter(|slot| *slot == "FLEX").count(), 1);
        assert!(slots.contains("TE"));
        assert!(slots.contains("RB"));
    }

    #[test]
    fn test_unrosterable_player_yields_empty_set() {
        let slots = eligible_slots(&player("Justin Tucker", &["K"]), &offensive_model());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_defensive_back_gains_defensive_flex() {
        let slots = eligible_slots(&player("Derwin James", &["DB", "D"]), &defensive_model());
        assert!(slots.contains("DB"));
        assert!(slots.contains("D"));
    }

    #[test]
    fn test_raw_defensive_flex_alone_grants_nothing() {
        // "D" among raw positions must not map onto the synthesized flex.
        let slots = eligible_slots(&player("Unknown Defender", &["D"]), &defensive_model());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_bench_is_never_eligible() {
        let slots = eligible_slots(&player("Bench Warmer", &["RB", "BN"]), &offensive_model());
        assert!(!slots.contains("BN"));
    }
}
