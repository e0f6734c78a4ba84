//! Configuration management for the Weather Insights service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WI_ prefix

use chrono::{DateTime, Utc};
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::InsightsThresholds;

use crate::models::ObservationQuery;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Observation data source configuration
    pub data: DataConfig,

    /// Filter applied when building the report
    #[serde(default)]
    pub query: QueryConfig,

    /// Trend tolerances and alert thresholds
    #[serde(default)]
    pub thresholds: InsightsThresholds,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// JSON-lines file of collector weather messages
    pub observations_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct QueryConfig {
    /// City label to filter on (case-insensitive)
    pub city: Option<String>,

    /// Inclusive lower bound, RFC3339
    pub start: Option<DateTime<Utc>>,

    /// Inclusive upper bound, RFC3339
    pub end: Option<DateTime<Utc>>,
}

impl QueryConfig {
    pub fn to_query(&self) -> ObservationQuery {
        ObservationQuery {
            start: self.start,
            end: self.end,
            city: self.city.clone(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("data.observations_path", "data/observations.jsonl")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WI_ prefix)
            .add_source(
                Environment::with_prefix("WI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
