//! Weather Insights - command line service
//!
//! Loads an observation log, applies the configured query, and prints the
//! resulting insights report as JSON.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_insights::services::{InMemoryObservationRepository, InsightsService};
use weather_insights::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_insights=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Weather Insights");
    tracing::info!("Environment: {}", config.environment);

    let repository = Arc::new(InMemoryObservationRepository::new());
    repository
        .load_json_lines(&config.data.observations_path)
        .await?;

    let service = InsightsService::with_thresholds(repository, config.thresholds);
    let report = service.get_insights(&config.query.to_query()).await?;

    if report.is_none() {
        tracing::info!("No observations matched the configured query");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
