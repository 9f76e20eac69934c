use coaching_efficiency::{CoachingEfficiencyEngine, EfficiencySettings};
use league_model::{Player, RosterSlotModel, TeamWeek};
use std::collections::BTreeMap;
use tracing::info;

fn player(
    id: &str,
    name: &str,
    positions: &[&str],
    points: f64,
    selected: &str,
    status: Option<&str>,
) -> Player {
    Player {
        player_id: id.to_string(),
        name: name.to_string(),
        points,
        eligible_positions: positions.iter().map(|p| (*p).to_string()).collect(),
        status: status.map(str::to_string),
        bye_week: None,
        selected_position: selected.to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Testing coaching efficiency engine");

    let slot_counts: BTreeMap<String, u32> =
        [("QB", 1), ("RB", 2), ("WR", 2), ("FLEX", 1), ("BN", 6)]
            .iter()
            .map(|(slot, count)| ((*slot).to_string(), *count))
            .collect();
    let mut flex_groups = BTreeMap::new();
    flex_groups.insert("FLEX".to_string(), RosterSlotModel::standard_flex_bases());
    let model = RosterSlotModel::new(slot_counts, flex_groups)?;
    info!("Built slot model with {} slots", model.slot_counts().len());

    let settings = EfficiencySettings::from_env()?;
    let engine = CoachingEfficiencyEngine::new(model, settings);

    let composition: Vec<String> =
        ["QB", "RB", "RB", "WR", "WR", "FLEX"].iter().map(|s| (*s).to_string()).collect();

    let teams = vec![
        TeamWeek {
            team_name: "Prestige Worldwide".to_string(),
            week: 4,
            players: vec![
                player("p1", "Lamar Jackson", &["QB"], 24.1, "QB", None),
                player("p2", "Bijan Robinson", &["RB"], 17.3, "RB", None),
                player("p3", "Jahmyr Gibbs", &["RB"], 13.9, "RB", None),
                player("p4", "Justin Jefferson", &["WR"], 21.4, "WR", None),
                player("p5", "Puka Nacua", &["WR"], 12.6, "WR", None),
                player("p6", "Rachaad White", &["RB"], 11.2, "FLEX", None),
                player("p7", "Jaylen Warren", &["RB"], 6.4, "BN", None),
            ],
            actual_points: 100.5,
            filled_active_slots: composition.clone(),
        },
        TeamWeek {
            team_name: "Bench Mob".to_string(),
            week: 4,
            players: vec![
                player("q1", "Josh Allen", &["QB"], 22.7, "QB", None),
                player("q2", "Derrick Henry", &["RB"], 19.0, "RB", None),
                player("q3", "James Cook", &["RB"], 10.5, "RB", None),
                player("q4", "CeeDee Lamb", &["WR"], 15.2, "WR", None),
                player("q5", "Zay Flowers", &["WR"], 9.7, "WR", None),
                player("q6", "Khalil Shakir", &["WR"], 8.8, "FLEX", None),
                player("q7", "Tee Higgins", &["WR"], 0.0, "BN", Some("O")),
                player("q8", "Rashee Rice", &["WR"], 0.0, "BN", Some("SUSP")),
                player("q9", "Jonathon Brooks", &["RB"], 0.0, "BN", Some("IR")),
            ],
            actual_points: 85.9,
            filled_active_slots: composition,
        },
    ];

    let (results, report) = engine.evaluate_league(&teams);

    for result in &results {
        info!(
            "{} week {}: efficiency {:.1}% ({:.2} actual / {:.2} optimal)",
            result.team_name, result.week, result.efficiency, result.actual_points,
            result.optimal_points
        );
    }

    info!("{} team(s) disqualified this run", report.disqualified_count());
    println!("{}", serde_json::to_string_pretty(&results)?);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
