//! Report payloads handed to renderers

use serde::Serialize;

use super::TargetCount;
use crate::trackers::{PlayerCount, PlayerPotions};

/// Sunder effectiveness for one raid roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunderReport {
    pub encounter: String,
    /// Deaths of roster creatures, the denominator of `effective_pct`
    pub tracked_deaths: u32,
    pub rows: Vec<SunderRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunderRow {
    pub player: String,
    pub effective_count: usize,
    pub effective_pct: f64,
    pub unnecessary_count: usize,
    pub top_unnecessary: Vec<TargetCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumableReport {
    pub potions: Vec<PotionRow>,
    pub runes: Vec<PlayerCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotionRow {
    pub player: String,
    pub total: usize,
    /// Uses per potion name, most used first
    pub by_potion: Vec<TargetCount>,
}

impl From<&PlayerPotions> for PotionRow {
    fn from(usage: &PlayerPotions) -> Self {
        let mut by_potion: Vec<TargetCount> = Vec::new();
        for potion in &usage.potions {
            match by_potion.iter_mut().find(|c| c.name == potion.name) {
                Some(entry) => entry.count += 1,
                None => by_potion.push(TargetCount {
                    name: potion.name.clone(),
                    count: 1,
                }),
            }
        }
        by_potion.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            player: usage.player.clone(),
            total: usage.potions.len(),
            by_potion,
        }
    }
}
