use hashbrown::HashMap;

use super::{PlayerCount, rank_by_count};
use crate::combat_log::{LineError, LogLine, field, normalize_player_name};

/// Dark Rune and Demonic Rune uses per player
#[derive(Debug, Clone, Default)]
pub struct RuneUsageTracker {
    runes_by_player: HashMap<String, usize>,
}

impl RuneUsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_rune_usage(&mut self, line: &LogLine) -> Result<(), LineError> {
        let player = normalize_player_name(line.field(field::CASTER_NAME)?)?;
        *self.runes_by_player.entry(player.to_string()).or_insert(0) += 1;
        Ok(())
    }

    /// Runes used by a normalized player name, 0 if none
    pub fn runes_used_by(&self, player: &str) -> usize {
        self.runes_by_player.get(player).copied().unwrap_or(0)
    }

    /// Counts for the given players, most runes first. Players without a
    /// recorded rune are omitted.
    pub fn usage_by_names(&self, players: &[&str]) -> Vec<PlayerCount> {
        self.ranked(|player| players.contains(&player))
    }

    pub fn usage_ranking(&self) -> Vec<PlayerCount> {
        self.ranked(|_| true)
    }

    fn ranked(&self, keep: impl Fn(&str) -> bool) -> Vec<PlayerCount> {
        let mut counts: Vec<PlayerCount> = self
            .runes_by_player
            .iter()
            .filter(|(player, count)| **count > 0 && keep(player))
            .map(|(player, count)| PlayerCount {
                player: player.clone(),
                count: *count,
            })
            .collect();
        rank_by_count(&mut counts, |c| c.count, |c| c.player.as_str());
        counts
    }
}
