use hashbrown::HashMap;

use super::{PlayerCount, PlayerTargets, rank_by_count};
use crate::combat_log::{
    LineError, LogLine, TargetEntity, field, normalize_mob_name, normalize_player_name,
};
use crate::game_data::Roster;

/// Every successful sunder cast, grouped by the casting player.
/// Each cast is one entry, duplicates included, in cast order.
#[derive(Debug, Clone, Default)]
pub struct SunderTracker {
    sunders_by_player: HashMap<String, Vec<TargetEntity>>,
}

impl SunderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one cast. Nothing is stored if any field fails to normalize.
    pub fn insert_sunder(&mut self, line: &LogLine) -> Result<(), LineError> {
        let player = normalize_player_name(line.field(field::CASTER_NAME)?)?;
        let target = TargetEntity {
            name: normalize_mob_name(line.field(field::TARGET_NAME)?),
            kind_tag: line.field(field::TARGET_KIND)?.to_string(),
        };

        self.sunders_by_player
            .entry(player.to_string())
            .or_default()
            .push(target);
        Ok(())
    }

    /// Sunders on roster creatures, per player, most sunders first
    pub fn sunders_by_names(&self, tracked: &Roster) -> Vec<PlayerTargets> {
        self.filtered(|target| tracked.contains(&target.name))
    }

    pub fn sunders_by_name(&self, name: &str) -> Vec<PlayerTargets> {
        self.filtered(|target| target.name == name)
    }

    /// Sunders on anything not in the roster, per player, most sunders first
    pub fn unnecessary_sunders(&self, tracked: &Roster) -> Vec<PlayerTargets> {
        self.filtered(|target| !tracked.contains(&target.name))
    }

    /// Total casts per player regardless of target
    pub fn sunder_counts(&self) -> Vec<PlayerCount> {
        let mut counts: Vec<PlayerCount> = self
            .sunders_by_player
            .iter()
            .filter(|(_, targets)| !targets.is_empty())
            .map(|(player, targets)| PlayerCount {
                player: player.clone(),
                count: targets.len(),
            })
            .collect();
        rank_by_count(&mut counts, |c| c.count, |c| c.player.as_str());
        counts
    }

    pub fn targets_of(&self, player: &str) -> &[TargetEntity] {
        self.sunders_by_player
            .get(player)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_sunders(&self) -> usize {
        self.sunders_by_player.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sunders_by_player.is_empty()
    }

    fn filtered(&self, keep: impl Fn(&TargetEntity) -> bool) -> Vec<PlayerTargets> {
        let mut result: Vec<PlayerTargets> = self
            .sunders_by_player
            .iter()
            .filter_map(|(player, targets)| {
                let targets: Vec<TargetEntity> =
                    targets.iter().filter(|t| keep(t)).cloned().collect();
                (!targets.is_empty()).then(|| PlayerTargets {
                    player: player.clone(),
                    targets,
                })
            })
            .collect();
        rank_by_count(&mut result, |p| p.targets.len(), |p| p.player.as_str());
        result
    }
}
