//! Single-pass analysis of one combat log
//!
//! An [`AnalysisSession`] owns one instance of every tracker and is the only
//! thing that mutates them. Once the scan is done, [`AnalysisSession::finish`]
//! hands the trackers over to an [`Analysis`], which only exposes queries.

mod stats;


use std::path::Path;

use hashbrown::HashMap;

use crate::combat_log::{
    Event, LineError, LogParser, ParseError, ParsedLog, Reader, ReaderError, TargetEntity,
};
use crate::game_data::Roster;
use crate::report::{
    ConsumableReport, PotionRow, SunderReport, SunderRow, percentage, top_targets,
};
use crate::trackers::{
    MobDeathTracker, PlayerCount, PotionTracker, RuneUsageTracker, SunderTracker,
};

pub use stats::IngestStats;

pub struct AnalysisSession {
    parser: LogParser,
    sunders: SunderTracker,
    mob_deaths: MobDeathTracker,
    potions: PotionTracker,
    runes: RuneUsageTracker,
    stats: IngestStats,
}

impl AnalysisSession {
    pub fn new(parser: LogParser) -> Self {
        Self {
            parser,
            sunders: SunderTracker::new(),
            mob_deaths: MobDeathTracker::new(),
            potions: PotionTracker::new(),
            runes: RuneUsageTracker::new(),
            stats: IngestStats::default(),
        }
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Reads, classifies and ingests a whole log file
    pub fn ingest_file(&mut self, path: &Path) -> Result<(), ReaderError> {
        let parsed = Reader::from(path.to_path_buf()).read_log_file(&self.parser)?;
        self.ingest_parsed(parsed);
        Ok(())
    }

    pub fn ingest_parsed(&mut self, parsed: ParsedLog) {
        tracing::debug!(
            physical_lines = parsed.line_count,
            unknown = parsed.unknown,
            "Dispatching parsed log"
        );
        self.stats.lines_read += parsed.unknown;
        self.stats.unknown += parsed.unknown;
        for (line_number, result) in parsed.lines {
            self.handle(line_number, result);
        }
    }

    /// Ingests raw lines in file order; the first line is the header and is
    /// never parsed.
    pub fn ingest_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for (idx, line) in lines.into_iter().enumerate().skip(1) {
            self.ingest_line(idx as u64 + 1, line);
        }
    }

    /// Ingests one non-header line. Blank lines are ignored.
    pub fn ingest_line(&mut self, line_number: u64, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let result = self.parser.parse_line(line_number, line);
        self.handle(line_number, result);
    }

    fn handle(&mut self, line_number: u64, result: Result<Event, ParseError>) {
        self.stats.lines_read += 1;
        let outcome = result
            .map_err(LineError::from)
            .and_then(|event| self.dispatch(&event).map(|_| event.kind()));

        match outcome {
            Ok(kind) => self.stats.record(kind),
            Err(err) => {
                self.stats.skipped += 1;
                tracing::warn!(line_number, error = %err, "Skipping combat log line");
            }
        }
    }

    /// Routes an event to its tracker
    pub fn dispatch(&mut self, event: &Event) -> Result<(), LineError> {
        match event {
            Event::SuccessfulSunder(line) => self.sunders.insert_sunder(line),
            Event::MobDeath(line) => Ok(self.mob_deaths.insert_mob_death(line)?),
            Event::PotionUse(line) => self.potions.insert_potion_usage(line),
            Event::RuneUse(line) => self.runes.insert_rune_usage(line),
            Event::Unknown(_) => Ok(()),
        }
    }

    /// Ends ingestion
    pub fn finish(self) -> Analysis {
        let stats = self.stats;
        tracing::info!(
            lines = stats.lines_read,
            sunders = stats.sunders,
            mob_deaths = stats.mob_deaths,
            potions = stats.potions,
            runes = stats.runes,
            skipped = stats.skipped,
            "Combat log ingested"
        );
        tracing::debug!(unknown = stats.unknown, "Unclassified lines ignored");

        Analysis {
            sunders: self.sunders,
            mob_deaths: self.mob_deaths,
            potions: self.potions,
            runes: self.runes,
            stats,
        }
    }
}

/// Read-only tracker state after ingestion
#[derive(Debug, Clone)]
pub struct Analysis {
    sunders: SunderTracker,
    mob_deaths: MobDeathTracker,
    potions: PotionTracker,
    runes: RuneUsageTracker,
    stats: IngestStats,
}

impl Analysis {
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    pub fn sunders(&self) -> &SunderTracker {
        &self.sunders
    }

    pub fn mob_deaths(&self) -> &MobDeathTracker {
        &self.mob_deaths
    }

    pub fn potions(&self) -> &PotionTracker {
        &self.potions
    }

    pub fn runes(&self) -> &RuneUsageTracker {
        &self.runes
    }

    pub fn sunder_counts(&self) -> Vec<PlayerCount> {
        self.sunders.sunder_counts()
    }

    /// One row per player with at least one sunder on a roster creature,
    /// in the same order as [`SunderTracker::sunders_by_names`].
    pub fn sunder_report(&self, tracked: &Roster, encounter: &str, top_n: usize) -> SunderReport {
        let tracked_deaths = self.mob_deaths.deaths_by_names(tracked);
        let unnecessary: HashMap<String, Vec<TargetEntity>> = self
            .sunders
            .unnecessary_sunders(tracked)
            .into_iter()
            .map(|entry| (entry.player, entry.targets))
            .collect();

        let rows = self
            .sunders
            .sunders_by_names(tracked)
            .into_iter()
            .map(|entry| {
                let wasted = unnecessary
                    .get(&entry.player)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                SunderRow {
                    effective_count: entry.targets.len(),
                    effective_pct: percentage(entry.targets.len(), tracked_deaths),
                    unnecessary_count: wasted.len(),
                    top_unnecessary: top_targets(wasted, top_n),
                    player: entry.player,
                }
            })
            .collect();

        tracing::debug!(encounter, tracked_deaths, "Built sunder report");
        SunderReport {
            encounter: encounter.to_string(),
            tracked_deaths,
            rows,
        }
    }

    pub fn consumable_report(&self) -> ConsumableReport {
        ConsumableReport {
            potions: self.potions.all_usage().iter().map(PotionRow::from).collect(),
            runes: self.runes.usage_ranking(),
        }
    }
}
