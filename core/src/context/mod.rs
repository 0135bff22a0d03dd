mod config;
mod error;

pub use config::{
    AppConfig, AppConfigExt, DEFAULT_ABILITY_NAME, DEFAULT_TOP_N, Encounter, default_log_path,
};
pub use error::ConfigError;
