//! Weather Insights service
//!
//! Loads collector weather messages into an observation repository and runs
//! the shared insights engine over filtered queries.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
