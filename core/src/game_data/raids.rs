//! Raid creature rosters
//!
//! Trash and boss names per raid instance, as they appear (unquoted) in the
//! combat log.

use sunderlog_types::Encounter;

use super::Roster;

pub static MOLTEN_CORE_TRASH: &[&str] = &[
    "Molten Giant",
    "Firelord",
    "Molten Destroyer",
    "Core Hound",
    "Lava Reaver",
    "Lava Surger",
    "Lava Annihilator",
    "Firewalker",
    "Flamewaker",
    "Flameguard",
];

pub static MOLTEN_CORE_BOSSES: &[&str] = &[
    "Lucifron",
    "Magmadar",
    "Gehennas",
    "Garr",
    "Baron Geddon",
    "Shazzrah",
    "Sulfuron Harbinger",
    "Golemagg the Incinerator",
    "Majordomo Executus",
    "Ragnaros",
];

pub static BWL_TRASH: &[&str] = &[
    "Grethok the Controller",
    "Blackwing Guardsman",
    "Death Talon Dragonspawn",
    "Death Talon Seether",
    "Death Talon Flamescale",
    "Death Talon Wyrmkin",
    "Death Talon Captain",
    "Death Talon Hatcher",
    "Death Talon Taskmaster",
    "Blackwing Warlock",
    "Blackwing Spellbinder",
    "Death Talon Overseer",
    "Death Talon Wyrmguard",
    "Chromatic Drakonid",
];

pub static BWL_BOSSES: &[&str] = &[
    "Razorgore the Untamed",
    "Vaelastrasz the Corrupt",
    "Broodlord Lashlayer",
    "Firemaw",
    "Ebonroc",
    "Flamegor",
    "Chromaggus",
    "Nefarian",
];

pub fn trash(encounter: Encounter) -> &'static [&'static str] {
    match encounter {
        Encounter::MoltenCore => MOLTEN_CORE_TRASH,
        Encounter::BlackwingLair => BWL_TRASH,
    }
}

pub fn bosses(encounter: Encounter) -> &'static [&'static str] {
    match encounter {
        Encounter::MoltenCore => MOLTEN_CORE_BOSSES,
        Encounter::BlackwingLair => BWL_BOSSES,
    }
}

/// Trash and bosses combined: every creature worth sundering in the raid
pub fn tracked_creatures(encounter: Encounter) -> Roster {
    trash(encounter)
        .iter()
        .chain(bosses(encounter))
        .copied()
        .collect()
}
