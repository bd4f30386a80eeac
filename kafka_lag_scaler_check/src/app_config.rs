use anyhow::Context;
use kafka_lag_scaler::{RawAuthConfig, RawConfig};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub trigger: TriggerDefinition,
}

/// One scaler trigger as the orchestrator would pass it in.
/// Keys inside `metadata` and `authParams` are case-sensitive.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TriggerDefinition {
    pub metadata: RawConfig,
    #[serde(default)]
    pub auth_params: RawAuthConfig,
}

impl AppConfig {
    pub fn build(config_file: &Path) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(config_file)
            .with_context(|| format!("While reading config {}", config_file.display()))?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, anyhow::Error> {
        let deserialized_config: AppConfig =
            toml::from_str(contents).context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }
}
