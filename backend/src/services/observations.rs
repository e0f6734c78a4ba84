//! Observation repository: storage and querying of validated observations

use std::path::Path;

use async_trait::async_trait;
use shared::{parse_weather_message, validate_observation, ValidationError};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{IngestSummary, Observation, ObservationQuery};

/// Source of observations for insights queries
#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Observations matching the query, sorted ascending by timestamp
    async fn find(&self, query: &ObservationQuery) -> AppResult<Vec<Observation>>;

    /// Total number of stored observations
    async fn count(&self) -> AppResult<usize>;
}

/// In-memory repository fed by collector messages
#[derive(Default)]
pub struct InMemoryObservationRepository {
    observations: RwLock<Vec<Observation>>,
}

impl InMemoryObservationRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an observation after range validation
    pub async fn insert(&self, observation: Observation) -> AppResult<()> {
        validate_observation(&observation)?;
        self.observations.write().await.push(observation);
        Ok(())
    }

    /// Validate a raw JSON collector message and store it
    pub async fn ingest_message(&self, raw: &str) -> AppResult<Observation> {
        let message = parse_weather_message(raw)?;
        let coordinates = message.coordinates();
        tracing::debug!(
            city = %message.location.city,
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Parsed weather message"
        );

        let observation = message.into_observation().ok_or_else(|| {
            ValidationError::new("timestamp", "invalid format, expected RFC3339")
        })?;

        self.insert(observation.clone()).await?;
        Ok(observation)
    }

    /// Load a JSON-lines file of collector messages.
    ///
    /// Blank lines are skipped. Invalid lines are logged and counted as
    /// rejected without aborting the load.
    pub async fn load_json_lines(&self, path: impl AsRef<Path>) -> AppResult<IngestSummary> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let mut summary = IngestSummary::default();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.ingest_message(line).await {
                Ok(_) => summary.accepted += 1,
                Err(err @ AppError::Validation(_)) => {
                    tracing::warn!(
                        path = %path.display(),
                        line = index + 1,
                        code = err.code(),
                        "Rejected weather message: {}",
                        err
                    );
                    summary.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            path = %path.display(),
            accepted = summary.accepted,
            rejected = summary.rejected,
            "Loaded observations"
        );

        Ok(summary)
    }
}

#[async_trait]
impl ObservationRepository for InMemoryObservationRepository {
    async fn find(&self, query: &ObservationQuery) -> AppResult<Vec<Observation>> {
        let observations = self.observations.read().await;
        let mut matching: Vec<Observation> = observations
            .iter()
            .filter(|o| query.matches(o))
            .cloned()
            .collect();

        matching.sort_by_key(|o| o.timestamp);
        Ok(matching)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.observations.read().await.len())
    }
}
