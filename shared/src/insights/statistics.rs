//! Descriptive statistics over observations

use crate::models::{Observation, WeatherStatistics};

use super::round2;

/// Calculate averages and temperature extremes.
///
/// Averages are rounded to two decimals; min/max are left unrounded.
/// An empty slice yields the all-zero record.
pub fn calculate_statistics(observations: &[Observation]) -> WeatherStatistics {
    if observations.is_empty() {
        return WeatherStatistics::default();
    }

    let count = observations.len() as f64;
    let mut total_temperature = 0.0;
    let mut total_humidity = 0.0;
    let mut total_wind_speed = 0.0;
    let mut total_rain_probability = 0.0;
    let mut max_temperature = f64::NEG_INFINITY;
    let mut min_temperature = f64::INFINITY;

    for observation in observations {
        total_temperature += observation.temperature;
        total_humidity += observation.humidity;
        total_wind_speed += observation.wind_speed;
        total_rain_probability += observation.rain_probability;
        max_temperature = max_temperature.max(observation.temperature);
        min_temperature = min_temperature.min(observation.temperature);
    }

    WeatherStatistics {
        avg_temperature: round2(total_temperature / count),
        avg_humidity: round2(total_humidity / count),
        avg_wind_speed: round2(total_wind_speed / count),
        avg_rain_probability: round2(total_rain_probability / count),
        max_temperature,
        min_temperature,
    }
}

/// Arithmetic mean of one field, unrounded. Zero for an empty slice.
pub(crate) fn mean_of(observations: &[Observation], field: impl Fn(&Observation) -> f64) -> f64 {
    if observations.is_empty() {
        return 0.0;
    }
    observations.iter().map(field).sum::<f64>() / observations.len() as f64
}
