use serde::Serialize;

use crate::combat_log::EventKind;

/// Counters for one ingestion pass. Header and blank lines are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub lines_read: u64,
    pub sunders: u64,
    pub mob_deaths: u64,
    pub potions: u64,
    pub runes: u64,
    pub unknown: u64,
    /// Lines that failed to parse, classify or normalize
    pub skipped: u64,
}

impl IngestStats {
    pub(crate) fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::SuccessfulSunder => self.sunders += 1,
            EventKind::MobDeath => self.mob_deaths += 1,
            EventKind::PotionUse => self.potions += 1,
            EventKind::RuneUse => self.runes += 1,
            EventKind::Unknown => self.unknown += 1,
        }
    }

    pub fn events(&self) -> u64 {
        self.sunders + self.mob_deaths + self.potions + self.runes + self.unknown
    }
}
