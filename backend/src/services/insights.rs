//! Insights service: runs the insights engine over repository queries

use std::sync::Arc;

use shared::{get_insights_with, InsightsThresholds};

use crate::error::AppResult;
use crate::models::{InsightsReport, ObservationQuery};
use crate::services::observations::ObservationRepository;

/// Service producing weather insights for filtered observation sets
#[derive(Clone)]
pub struct InsightsService {
    repository: Arc<dyn ObservationRepository>,
    thresholds: InsightsThresholds,
}

impl InsightsService {
    /// Create a new InsightsService with the built-in thresholds
    pub fn new(repository: Arc<dyn ObservationRepository>) -> Self {
        Self::with_thresholds(repository, InsightsThresholds::default())
    }

    /// Create a new InsightsService with custom thresholds
    pub fn with_thresholds(
        repository: Arc<dyn ObservationRepository>,
        thresholds: InsightsThresholds,
    ) -> Self {
        Self {
            repository,
            thresholds,
        }
    }

    /// Get insights for every observation matching `query`.
    ///
    /// `Ok(None)` means nothing matched; it is not an error.
    pub async fn get_insights(&self, query: &ObservationQuery) -> AppResult<Option<InsightsReport>> {
        tracing::debug!(
            city = query.city.as_deref().unwrap_or("*"),
            start = ?query.start,
            end = ?query.end,
            "Querying observations for insights"
        );

        let observations = self.repository.find(query).await?;

        if observations.is_empty() {
            tracing::info!("No observations matched, skipping insights");
            return Ok(None);
        }

        let report = get_insights_with(&observations, query.city.as_deref(), &self.thresholds);

        if let Some(report) = &report {
            tracing::info!(
                data_points = report.data_points,
                classification = %report.classification,
                comfort_score = report.comfort_score,
                alerts = report.alerts.len(),
                "Generated weather insights"
            );
        }

        Ok(report)
    }
}
