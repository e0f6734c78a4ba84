//! WebAssembly module for the Weather Insights platform
//!
//! Provides client-side computation for the dashboard:
//! - Insights reports from observation JSON
//! - Temperature classification
//! - Comfort scoring
//! - Collector message validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::insights::*;
pub use shared::models::*;
pub use shared::validation::*;

/// Compute an insights report from a JSON array of observations.
///
/// Returns the report as JSON, or `"null"` when the array is empty.
#[wasm_bindgen]
pub fn compute_insights(
    observations_json: &str,
    location_name: Option<String>,
) -> Result<String, JsValue> {
    compute_insights_json(observations_json, location_name.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

fn compute_insights_json(
    observations_json: &str,
    location_name: Option<&str>,
) -> Result<String, String> {
    let observations: Vec<Observation> = serde_json::from_str(observations_json)
        .map_err(|e| format!("Invalid observations JSON: {}", e))?;

    for (index, observation) in observations.iter().enumerate() {
        validate_observation(observation)
            .map_err(|e| format!("Invalid observation at index {}: {}", index, e))?;
    }

    let report = get_insights(&observations, location_name);
    serde_json::to_string(&report).map_err(|e| format!("Failed to serialize report: {}", e))
}

/// Classify an average temperature (°C)
#[wasm_bindgen]
pub fn classify_average_temperature(avg_temperature: f64) -> String {
    classify_temperature(avg_temperature).to_string()
}

/// Comfort score (0-100) for aggregate conditions
#[wasm_bindgen]
pub fn comfort_score(
    avg_temperature: f64,
    avg_humidity: f64,
    avg_wind_speed: f64,
    avg_rain_probability: f64,
) -> u8 {
    calculate_comfort_score(&WeatherStatistics {
        avg_temperature,
        avg_humidity,
        avg_wind_speed,
        avg_rain_probability,
        max_temperature: avg_temperature,
        min_temperature: avg_temperature,
    })
}

/// Check a raw collector message before submitting it
#[wasm_bindgen]
pub fn is_valid_message(message_json: &str) -> bool {
    is_valid_weather_message(message_json)
}
