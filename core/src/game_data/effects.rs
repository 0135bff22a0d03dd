//! Consumable effect ids (classic spell ids of the cast, not the item ids)

use phf::phf_map;

pub const UNKNOWN_POTION: &str = "Unknown";

// common raid consumables only, not exhaustive
pub static POTION_NAMES_BY_EFFECT_ID: phf::Map<i64, &'static str> = phf_map! {
    6615i64 => "Free Action Potion",
    17531i64 => "Major Mana Potion",
    3169i64 => "Limited Invulnerability Potion",
};

pub static RUNE_NAMES_BY_EFFECT_ID: phf::Map<i64, &'static str> = phf_map! {
    16666i64 => "Demonic Rune",
    27869i64 => "Dark Rune",
};

/// Display name for a potion effect id, "Unknown" when not in the table
pub fn potion_name(effect_id: i64) -> &'static str {
    POTION_NAMES_BY_EFFECT_ID
        .get(&effect_id)
        .copied()
        .unwrap_or(UNKNOWN_POTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potion_name_lookup() {
        assert_eq!(potion_name(17531), "Major Mana Potion");
        assert_eq!(potion_name(6615), "Free Action Potion");
        assert_eq!(potion_name(1), UNKNOWN_POTION);
    }
}
