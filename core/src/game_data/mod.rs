mod effects;
mod raids;
mod roster;

pub use effects::{POTION_NAMES_BY_EFFECT_ID, RUNE_NAMES_BY_EFFECT_ID, UNKNOWN_POTION, potion_name};
pub use raids::{bosses, tracked_creatures, trash};
pub use roster::Roster;
