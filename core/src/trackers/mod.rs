//! Per-entity accumulators
//!
//! Each tracker owns the state for one kind of event. During ingestion only
//! the `insert_*` methods are called; afterwards only the query methods.
//!
//! Every ranked view sorts by count (descending) and then by player key
//! (ascending), so output does not depend on hash map iteration order.
//! Players whose filtered list ends up empty are left out of ranked views.

mod mob_death;
mod potion;
mod rune;
mod sunder;


use serde::Serialize;

use crate::combat_log::{Potion, TargetEntity};

pub use mob_death::MobDeathTracker;
pub use potion::PotionTracker;
pub use rune::RuneUsageTracker;
pub use sunder::SunderTracker;

/// A player's sundered targets, filtered by some roster rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTargets {
    pub player: String,
    pub targets: Vec<TargetEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPotions {
    pub player: String,
    pub potions: Vec<Potion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCount {
    pub player: String,
    pub count: usize,
}

pub(crate) fn rank_by_count<T>(
    entries: &mut [T],
    count: impl Fn(&T) -> usize,
    player: impl Fn(&T) -> &str,
) {
    entries.sort_by(|a, b| {
        count(b)
            .cmp(&count(a))
            .then_with(|| player(a).cmp(player(b)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_count_breaks_ties_by_player() {
        let mut entries = vec![
            PlayerCount { player: "Zed".into(), count: 2 },
            PlayerCount { player: "Amy".into(), count: 1 },
            PlayerCount { player: "Bob".into(), count: 2 },
            PlayerCount { player: "Abe".into(), count: 2 },
        ];
        rank_by_count(&mut entries, |e| e.count, |e| e.player.as_str());

        let order: Vec<&str> = entries.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(order, vec!["Abe", "Bob", "Zed", "Amy"]);
    }
}
