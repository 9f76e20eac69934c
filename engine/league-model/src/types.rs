//! Read-only weekly roster records consumed by the efficiency engine

use crate::slots::{BENCH_SLOT, INJURED_RESERVE_SLOT};
use serde::{Deserialize, Serialize};

/// One rostered player for one week, as supplied by the ingestion layer.
///
/// The engine only reads these records; scoring and position certification
/// happen upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Stable external player ID. Used to keep a player out of more than
    /// one lineup slot, so it must be unique within a roster.
    pub player_id: String,

    /// Display name (e.g. "Lamar Jackson").
    pub name: String,

    /// Realized fantasy points for the week.
    pub points: f64,

    /// Positions the player is certified to play, in source order.
    pub eligible_positions: Vec<String>,

    /// Health/roster status code (e.g. "O", "SUSP"). Absent means healthy.
    #[serde(default)]
    pub status: Option<String>,

    /// Week the player's real team does not play, when known.
    #[serde(default)]
    pub bye_week: Option<u32>,

    /// Slot the manager actually started the player in, or "BN"/"IR".
    pub selected_position: String,
}

impl Player {
    /// Whether the manager seated this player on the bench. Players on
    /// injured reserve are not benched for disqualification purposes.
    pub fn is_benched(&self) -> bool {
        self.selected_position == BENCH_SLOT
    }

    /// Whether this player occupies an injured reserve slot.
    pub fn is_on_injured_reserve(&self) -> bool {
        self.selected_position == INJURED_RESERVE_SLOT
    }
}

/// One team's roster snapshot for one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWeek {
    /// Team display name, the key the downstream report uses.
    pub team_name: String,

    /// Week under evaluation.
    pub week: u32,

    /// Full roster: starters, bench, and injured reserve.
    pub players: Vec<Player>,

    /// The team's realized weekly score, aggregated upstream.
    pub actual_points: f64,

    /// Active slot names the manager actually filled (bench and IR
    /// excluded), one entry per started player.
    pub filled_active_slots: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_deserializes_from_ingestion_json() {
        let json = r#"{
            "player_id": "4046",
            "name": "Patrick Mahomes",
            "points": 24.7,
            "eligible_positions": ["QB"],
            "status": null,
            "bye_week": 10,
            "selected_position": "QB"
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.name, "Patrick Mahomes");
        assert_eq!(player.bye_week, Some(10));
        assert!(!player.is_benched());
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"{
            "player_id": "1479",
            "name": "Justin Tucker",
            "points": 9.0,
            "eligible_positions": ["K"],
            "selected_position": "BN"
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.status, None);
        assert_eq!(player.bye_week, None);
        assert!(player.is_benched());
    }

    #[test]
    fn test_injured_reserve_is_not_benched() {
        let player = Player {
            player_id: "2133".to_string(),
            name: "Nick Chubb".to_string(),
            points: 0.0,
            eligible_positions: vec!["RB".to_string()],
            status: Some("IR".to_string()),
            bye_week: None,
            selected_position: "IR".to_string(),
        };

        assert!(player.is_on_injured_reserve());
        assert!(!player.is_benched());
    }
}
