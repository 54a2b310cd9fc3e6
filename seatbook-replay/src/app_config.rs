use serde::Deserialize;
use std::env;
use std::path::Path;
use seatbook_core::TrackerConfig;
use crate::output::OutputFormat;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub print_events: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name(&file("local")).required(false))
            // Eg.. `SEATBOOK_TRACKER__FIELD_NAME=seats`
            .add_source(config::Environment::with_prefix("SEATBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
