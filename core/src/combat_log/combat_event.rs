use serde::Serialize;

use super::ParseError;

// positions within the comma separated payload, not exhaustive
pub mod field {
    pub const EVENT_NAME: usize = 0;
    pub const CASTER_KIND: usize = 1;
    pub const CASTER_NAME: usize = 2;
    pub const TARGET_KIND: usize = 5;
    pub const TARGET_NAME: usize = 6;
    pub const EFFECT_ID: usize = 9;
    pub const EFFECT_NAME: usize = 10;
}

pub mod event_name {
    pub const SPELL_CAST_SUCCESS: &str = "SPELL_CAST_SUCCESS";
    pub const UNIT_DIED: &str = "UNIT_DIED";
}

/// One log line after the timestamp prefix has been stripped and the payload
/// split on commas. Fields are kept verbatim (quotes included).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogLine {
    pub line_number: u64,
    pub fields: Vec<String>,
}

impl LogLine {
    pub fn new(line_number: u64, fields: Vec<String>) -> Self {
        Self {
            line_number,
            fields,
        }
    }

    /// Bounds-checked field access
    pub fn field(&self, index: usize) -> Result<&str, ParseError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(ParseError::FieldOutOfRange {
                line_number: self.line_number,
                index,
                len: self.fields.len(),
            })
    }

    pub fn effect_id(&self) -> Result<i64, ParseError> {
        let raw = self.field(field::EFFECT_ID)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidValue {
                line_number: self.line_number,
                detail: format!("effect id {raw:?} is not an integer"),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    SuccessfulSunder,
    MobDeath,
    PotionUse,
    RuneUse,
    Unknown,
}

/// A classified log line. Every variant keeps the full field sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SuccessfulSunder(LogLine),
    MobDeath(LogLine),
    PotionUse(LogLine),
    RuneUse(LogLine),
    Unknown(LogLine),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::SuccessfulSunder(_) => EventKind::SuccessfulSunder,
            Event::MobDeath(_) => EventKind::MobDeath,
            Event::PotionUse(_) => EventKind::PotionUse,
            Event::RuneUse(_) => EventKind::RuneUse,
            Event::Unknown(_) => EventKind::Unknown,
        }
    }

    pub fn line(&self) -> &LogLine {
        match self {
            Event::SuccessfulSunder(line)
            | Event::MobDeath(line)
            | Event::PotionUse(line)
            | Event::RuneUse(line)
            | Event::Unknown(line) => line,
        }
    }
}

/// A sundered creature. `kind_tag` is the raw unit field (e.g. a
/// `Creature-0-...` GUID) and is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetEntity {
    pub name: String,
    pub kind_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Potion {
    /// Display name resolved from the effect id, "Unknown" if unresolved
    pub name: String,
    /// Raw spell name field
    pub effect: String,
    pub effect_id: i64,
}
