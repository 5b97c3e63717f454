use serde::Deserialize;
use std::collections::HashMap;
use config::{Config, ConfigError};
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Set a seed to replay a run with identical generated payloads.
    #[serde(default)]
    pub seed: Option<u64>,
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.api.base_url,
            timeout_secs = settings.api.timeout_secs,
            seed = ?settings.seed,
            "Loaded settings"
        );

        Ok(settings)
    }
}
