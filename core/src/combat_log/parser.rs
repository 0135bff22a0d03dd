use super::*;
use crate::game_data::{POTION_NAMES_BY_EFFECT_ID, RUNE_NAMES_BY_EFFECT_ID};
use memchr::memchr_iter;


/// Number of space separated timestamp tokens in front of the payload
const TIMESTAMP_TOKENS: usize = 3;

/// Strips the timestamp prefix and splits the payload on commas.
///
/// `4/14 20:01:33.213  SPELL_CAST_SUCCESS,Player-4395-0104CDC1,"Zizek-Stalagg",...`
/// yields `["SPELL_CAST_SUCCESS", "Player-4395-0104CDC1", "\"Zizek-Stalagg\"", ...]`.
pub fn split_line(line_number: u64, line: &str) -> Result<LogLine, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let payload_start = memchr_iter(b' ', line.as_bytes())
        .nth(TIMESTAMP_TOKENS - 1)
        .ok_or(ParseError::MissingPayload { line_number })?;

    let fields = line[payload_start + 1..]
        .split(',')
        .map(str::to_string)
        .collect();

    Ok(LogLine::new(line_number, fields))
}

/// Turns split lines into typed events.
///
/// Rules are checked in a fixed order and compare with substring containment,
/// so compound fields such as `Player-4395-0104CDC1` still match `Player`.
#[derive(Debug, Clone)]
pub struct LogParser {
    ability_name: String,
    consumables: bool,
}

impl LogParser {
    pub fn new(ability_name: impl Into<String>) -> Self {
        Self {
            ability_name: ability_name.into(),
            consumables: false,
        }
    }

    /// Also classify potion and rune casts by effect id
    pub fn with_consumables(mut self) -> Self {
        self.consumables = true;
        self
    }

    pub fn tracks_consumables(&self) -> bool {
        self.consumables
    }

    pub fn parse_line(&self, line_number: u64, line: &str) -> Result<Event, ParseError> {
        let line = split_line(line_number, line)?;
        self.classify(line)
    }

    pub fn classify(&self, line: LogLine) -> Result<Event, ParseError> {
        if self.is_successful_sunder(&line)? {
            return Ok(Event::SuccessfulSunder(line));
        }
        if Self::is_mob_death(&line)? {
            return Ok(Event::MobDeath(line));
        }
        if self.consumables {
            return Self::classify_consumable(line);
        }
        Ok(Event::Unknown(line))
    }

    /// Effect id lookup against the potion and rune tables. Only successful
    /// casts are considered.
    pub fn classify_consumable(line: LogLine) -> Result<Event, ParseError> {
        if !line
            .field(field::EVENT_NAME)?
            .contains(event_name::SPELL_CAST_SUCCESS)
        {
            return Ok(Event::Unknown(line));
        }

        let effect_id = line.effect_id()?;
        if POTION_NAMES_BY_EFFECT_ID.contains_key(&effect_id) {
            Ok(Event::PotionUse(line))
        } else if RUNE_NAMES_BY_EFFECT_ID.contains_key(&effect_id) {
            Ok(Event::RuneUse(line))
        } else {
            Ok(Event::Unknown(line))
        }
    }

    // a spell cast success of the tracked ability, cast by a player
    fn is_successful_sunder(&self, line: &LogLine) -> Result<bool, ParseError> {
        Ok(line
            .field(field::EVENT_NAME)?
            .contains(event_name::SPELL_CAST_SUCCESS)
            && line.field(field::EFFECT_NAME)?.contains(&self.ability_name)
            && line.field(field::CASTER_KIND)?.contains("Player"))
    }

    fn is_mob_death(line: &LogLine) -> Result<bool, ParseError> {
        Ok(line.field(field::EVENT_NAME)?.contains(event_name::UNIT_DIED)
            && line.field(field::TARGET_KIND)?.contains("Creature"))
    }
}
