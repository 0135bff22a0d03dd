pub mod combat_log;
pub mod context;
pub mod game_data;
pub mod report;
pub mod session;
pub mod trackers;

// Re-exports for convenience
pub use combat_log::*;
pub use context::{AppConfig, AppConfigExt, ConfigError, Encounter, default_log_path};
pub use game_data::{Roster, tracked_creatures};
pub use report::{ConsumableReport, PotionRow, SunderReport, SunderRow, TargetCount};
pub use session::{Analysis, AnalysisSession, IngestStats};
pub use trackers::{
    MobDeathTracker, PlayerCount, PlayerPotions, PlayerTargets, PotionTracker, RuneUsageTracker,
    SunderTracker,
};
