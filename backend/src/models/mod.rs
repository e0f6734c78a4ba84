//! Models for the Weather Insights service
//!
//! Re-exports models from the shared crate and adds backend-specific models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::TimeRange;

pub use shared::models::*;

/// Filter applied by the repository before observations reach the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationQuery {
    /// Inclusive lower bound
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    pub end: Option<DateTime<Utc>>,
    /// Case-insensitive match on the observation's location label
    pub city: Option<String>,
}

impl ObservationQuery {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Default::default()
        }
    }

    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            city: None,
        }
    }

    /// Time window covered by the query; open bounds extend to the representable limits
    pub fn period(&self) -> TimeRange {
        TimeRange::new(
            self.start.unwrap_or(DateTime::<Utc>::MIN_UTC),
            self.end.unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }

    /// Whether an observation passes every configured criterion
    pub fn matches(&self, observation: &Observation) -> bool {
        if !self.period().contains(observation.timestamp) {
            return false;
        }
        match (&self.city, &observation.location) {
            (None, _) => true,
            (Some(city), Some(location)) => city.to_lowercase() == location.to_lowercase(),
            (Some(_), None) => false,
        }
    }
}

/// Outcome of loading an ingest file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub accepted: usize,
    pub rejected: usize,
}
