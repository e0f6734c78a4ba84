//! Shared types and the insights engine for the Weather Insights platform
//!
//! This crate contains the pure computation shared between the backend,
//! the dashboard (via WASM), and other components of the system.

pub mod insights;
pub mod models;
pub mod types;
pub mod validation;

pub use insights::*;
pub use models::*;
pub use types::*;
pub use validation::*;
