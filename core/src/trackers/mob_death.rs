use hashbrown::HashMap;

use crate::combat_log::{LogLine, ParseError, field, normalize_mob_name};
use crate::game_data::Roster;

/// Creature deaths keyed by creature name. Deaths belong to the creature,
/// never to whoever landed the killing blow.
#[derive(Debug, Clone, Default)]
pub struct MobDeathTracker {
    deaths_by_mob: HashMap<String, u32>,
}

impl MobDeathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_mob_death(&mut self, line: &LogLine) -> Result<(), ParseError> {
        let mob = normalize_mob_name(line.field(field::TARGET_NAME)?);
        *self.deaths_by_mob.entry(mob).or_insert(0) += 1;
        Ok(())
    }

    /// Sum of deaths of every roster creature; 0 when nothing matches
    pub fn deaths_by_names(&self, tracked: &Roster) -> u32 {
        self.deaths_by_mob
            .iter()
            .filter(|(mob, _)| tracked.contains(mob))
            .map(|(_, count)| count)
            .sum()
    }

    pub fn deaths_by_name(&self, mob: &str) -> u32 {
        self.deaths_by_mob.get(mob).copied().unwrap_or(0)
    }

    pub fn total_deaths(&self) -> u32 {
        self.deaths_by_mob.values().sum()
    }
}
