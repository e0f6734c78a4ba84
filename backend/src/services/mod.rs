//! Business logic services for the Weather Insights platform

pub mod insights;
pub mod observations;

pub use insights::InsightsService;
pub use observations::{InMemoryObservationRepository, ObservationRepository};
