use hashbrown::HashMap;

use super::{PlayerPotions, rank_by_count};
use crate::combat_log::{LineError, LogLine, Potion, field, normalize_player_name};
use crate::game_data::potion_name;

/// Potion casts grouped by the drinking player
#[derive(Debug, Clone, Default)]
pub struct PotionTracker {
    potions_by_player: HashMap<String, Vec<Potion>>,
}

impl PotionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_potion_usage(&mut self, line: &LogLine) -> Result<(), LineError> {
        let player = normalize_player_name(line.field(field::CASTER_NAME)?)?;
        let effect_id = line.effect_id()?;
        let potion = Potion {
            name: potion_name(effect_id).to_string(),
            effect: line.field(field::EFFECT_NAME)?.to_string(),
            effect_id,
        };

        self.potions_by_player
            .entry(player.to_string())
            .or_default()
            .push(potion);
        Ok(())
    }

    /// Uses of the given potions (display names, e.g. "Major Mana Potion")
    /// per player, most uses first. Players who used none are omitted.
    pub fn usage_by_names(&self, potion_names: &[&str]) -> Vec<PlayerPotions> {
        let mut result: Vec<PlayerPotions> = self
            .potions_by_player
            .iter()
            .filter_map(|(player, potions)| {
                let potions: Vec<Potion> = potions
                    .iter()
                    .filter(|p| potion_names.contains(&p.name.as_str()))
                    .cloned()
                    .collect();
                (!potions.is_empty()).then(|| PlayerPotions {
                    player: player.clone(),
                    potions,
                })
            })
            .collect();
        rank_by_count(&mut result, |p| p.potions.len(), |p| p.player.as_str());
        result
    }

    pub fn usage_by_name(&self, potion_name: &str) -> Vec<PlayerPotions> {
        self.usage_by_names(&[potion_name])
    }

    /// Every recorded potion, grouped per player
    pub fn all_usage(&self) -> Vec<PlayerPotions> {
        let mut result: Vec<PlayerPotions> = self
            .potions_by_player
            .iter()
            .filter(|(_, potions)| !potions.is_empty())
            .map(|(player, potions)| PlayerPotions {
                player: player.clone(),
                potions: potions.clone(),
            })
            .collect();
        rank_by_count(&mut result, |p| p.potions.len(), |p| p.player.as_str());
        result
    }
}
