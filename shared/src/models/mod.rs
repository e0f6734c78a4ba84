//! Domain models for the Weather Insights platform

mod insights;
mod weather;

pub use insights::*;
pub use weather::*;
