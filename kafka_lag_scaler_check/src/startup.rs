use crate::app_config::AppConfig;
use anyhow::Context;
use kafka_lag_scaler::ScalerMetadata;
use tracing::{error, info};

pub fn check_trigger(config: &AppConfig) -> Result<ScalerMetadata, anyhow::Error> {
    let trigger = &config.trigger;
    let metadata = kafka_lag_scaler::validate(&trigger.metadata, &trigger.auth_params)
        .inspect_err(|e| error!("Rejected trigger definition, field {}: {e}", e.field()))
        .context("While validating trigger metadata")?;

    info!(
        "Trigger is valid. Brokers: {:?}, group: {}, topic: {}, offset reset: {}, auth: {:?}",
        metadata.bootstrap_servers(),
        metadata.group(),
        metadata.topic(),
        metadata.consumer_offset_reset(),
        metadata.auth().map(|x| x.mode()),
    );

    Ok(metadata)
}
