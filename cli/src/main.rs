//! Sunder Armor report for World of Warcraft classic combat logs
//!
//! Reads one combat log and prints, per warrior, how many sunders landed on
//! creatures that matter for the selected raid and how many were wasted.

mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sunderlog_core::{
    AnalysisSession, AppConfig, AppConfigExt, LogParser, tracked_creatures,
};
use sunderlog_types::Encounter;

use crate::output::JsonOutput;

// ═══════════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "sunderlog")]
#[command(about = "Sunder Armor effectiveness from a WoW classic combat log")]
#[command(version)]
struct Args {
    /// Path to WoWCombatLog.txt (defaults to the configured log path)
    path: Option<PathBuf>,

    /// Raid whose creatures count as effective targets (mc, bwl)
    #[arg(short, long)]
    encounter: Option<Encounter>,

    /// Unnecessarily sundered targets listed per player
    #[arg(short, long)]
    top: Option<usize>,

    /// Spell name counted as a sunder
    #[arg(short, long)]
    ability: Option<String>,

    /// Also report potion and rune usage
    #[arg(long)]
    consumables: bool,

    /// Also print total sunder casts per player
    #[arg(long)]
    counts: bool,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective settings to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    /// Command line flags take precedence over the config file
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.path {
            config.log_path = path.display().to_string();
        }
        if let Some(encounter) = self.encounter {
            config.encounter = encounter;
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(ability) = &self.ability {
            config.ability_name = ability.clone();
        }
        config
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════════════════

/// Exit status for a missing log or a failed analysis
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();
    let config = args.apply(AppConfig::load());
    ExitCode::from(execute(&args, &config))
}

/// Runs one analysis with already merged settings and returns the exit status
fn execute(args: &Args, config: &AppConfig) -> u8 {
    if args.save_config {
        match config.save() {
            Ok(()) => tracing::info!(path = ?AppConfig::config_path(), "Configuration saved"),
            Err(err) => tracing::warn!(error = %err, "Failed to save configuration"),
        }
    }

    let log_path = match resolve_log_path(config) {
        Ok(path) => path,
        Err(message) => {
            eprintln!("{message}");
            return EXIT_FAILURE;
        }
    };
    tracing::info!(
        path = %log_path.display(),
        encounter = config.encounter.display_name(),
        "Analyzing combat log"
    );

    match run(args, config, log_path) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            EXIT_FAILURE
        }
    }
}

fn resolve_log_path(config: &AppConfig) -> Result<PathBuf, String> {
    let log_path = PathBuf::from(&config.log_path);
    if !log_path.is_file() {
        return Err(format!(
            "File does not exist at {}. Exiting.",
            log_path.display()
        ));
    }
    Ok(log_path)
}

fn run(args: &Args, config: &AppConfig, log_path: PathBuf) -> Result<(), String> {
    let mut parser = LogParser::new(config.ability_name.as_str());
    if args.consumables {
        parser = parser.with_consumables();
    }

    let mut session = AnalysisSession::new(parser);
    session.ingest_file(&log_path).map_err(|e| e.to_string())?;
    let analysis = session.finish();

    let encounter: Encounter = config.encounter;
    let report = analysis.sunder_report(
        &tracked_creatures(encounter),
        encounter.label(),
        config.top_n,
    );
    let counts = args.counts.then(|| analysis.sunder_counts());
    let consumables = args.consumables.then(|| analysis.consumable_report());

    if args.json {
        let json = JsonOutput {
            stats: analysis.stats(),
            sunders: &report,
            sunder_counts: counts.as_deref(),
            consumables: consumables.as_ref(),
        }
        .render()
        .map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", output::render_sunder_report(&report));
    if let Some(counts) = &counts {
        println!("{}", output::render_sunder_counts(counts));
    }
    if let Some(consumables) = &consumables {
        println!("{}", output::render_consumables(consumables));
    }
    Ok(())
}
