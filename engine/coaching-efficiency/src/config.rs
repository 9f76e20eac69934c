//! Engine settings
//!
//! Runtime policy knobs for the efficiency engine: which roster statuses
//! bar a benched player from counting as startable, whether the
//! disqualification policy runs at all, and any teams disqualified by hand
//! for the current week.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Settings for the coaching efficiency engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencySettings {
    /// Status codes that make a benched player unstartable.
    pub prohibited_statuses: BTreeSet<String>,

    /// Apply the disqualification policy after scoring.
    pub disqualification_enabled: bool,

    /// Teams disqualified by hand for the current week.
    pub disqualified_teams: BTreeSet<String>,
}

impl Default for EfficiencySettings {
    fn default() -> Self {
        Self {
            prohibited_statuses: ["PUP-P", "SUSP", "O", "IR", "INACTIVE", "IR-R"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            disqualification_enabled: false,
            disqualified_teams: BTreeSet::new(),
        }
    }
}

impl EfficiencySettings {
    /// Load settings from a TOML file.
    pub fn load_from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let settings: EfficiencySettings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a TOML file.
    pub fn save_to_file(&self, path: &str) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default settings with environment overrides applied.
    ///
    /// `EFFICIENCY_DQ_ENABLED` toggles the disqualification policy and
    /// `EFFICIENCY_DQ_TEAMS` is a comma-separated manual override list.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut settings = Self::default();

        if let Ok(enabled) = std::env::var("EFFICIENCY_DQ_ENABLED") {
            settings.disqualification_enabled = enabled.parse().unwrap_or(false);
        }

        if let Ok(teams) = std::env::var("EFFICIENCY_DQ_TEAMS") {
            settings.disqualified_teams = teams
                .split(',')
                .map(|team| team.trim().to_string())
                .filter(|team| !team.is_empty())
                .collect();
        }

        Ok(settings)
    }
}
