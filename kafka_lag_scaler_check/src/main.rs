#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(forgetting_copy_types)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use kafka_lag_scaler_check::app_config::AppConfig;
use kafka_lag_scaler_check::startup::check_trigger;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Validates a kafka lag scaler trigger definition.
#[derive(Debug, Parser)]
struct Args {
    /// TOML file with `[trigger.metadata]` and optional `[trigger.authParams]` tables
    #[arg(short, long, default_value = "scaler.toml")]
    config: PathBuf,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();

    let config = AppConfig::build(&args.config).context("While building app config")?;

    check_trigger(&config)?;

    Ok(())
}
