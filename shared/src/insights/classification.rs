//! Temperature classification

use crate::models::TemperatureClassification;

/// Classify an average temperature (°C).
///
/// Each breakpoint belongs to the higher bucket: 10.0 is cool, 32.0 is hot.
pub fn classify_temperature(avg_temperature: f64) -> TemperatureClassification {
    if avg_temperature < 10.0 {
        TemperatureClassification::Cold
    } else if avg_temperature < 18.0 {
        TemperatureClassification::Cool
    } else if avg_temperature < 25.0 {
        TemperatureClassification::Pleasant
    } else if avg_temperature < 32.0 {
        TemperatureClassification::Warm
    } else {
        TemperatureClassification::Hot
    }
}
