//! Shared configuration types for sunderlog
//!
//! This crate contains serializable configuration types that are shared between
//! the analysis library (sunderlog-core) and the command line frontend.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Encounter
// ─────────────────────────────────────────────────────────────────────────────

/// Raid instance whose creature roster decides which sunders count as effective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encounter {
    MoltenCore,
    #[default]
    BlackwingLair,
}

impl Encounter {
    /// Short label used in report titles (MC, BWL)
    pub fn label(&self) -> &'static str {
        match self {
            Encounter::MoltenCore => "MC",
            Encounter::BlackwingLair => "BWL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Encounter::MoltenCore => "Molten Core",
            Encounter::BlackwingLair => "Blackwing Lair",
        }
    }
}

impl std::str::FromStr for Encounter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mc" | "molten_core" | "molten-core" => Ok(Encounter::MoltenCore),
            "bwl" | "blackwing_lair" | "blackwing-lair" => Ok(Encounter::BlackwingLair),
            other => Err(format!("unknown encounter '{other}' (expected mc or bwl)")),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_ABILITY_NAME: &str = "Sunder Armor";
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Combat log read when no path is given on the command line
    #[serde(default)]
    pub log_path: String,

    /// Spell display name counted as a sunder cast
    #[serde(default = "default_ability_name")]
    pub ability_name: String,

    /// How many unnecessarily sundered targets to list per player
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default)]
    pub encounter: Encounter,
}

fn default_ability_name() -> String {
    DEFAULT_ABILITY_NAME.to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl AppConfig {
    /// Create a new AppConfig with the specified log path.
    /// Other fields use their default values.
    pub fn with_log_path(log_path: String) -> Self {
        Self {
            log_path,
            ability_name: default_ability_name(),
            top_n: DEFAULT_TOP_N,
            encounter: Encounter::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_log_path(String::new())
    }
}
