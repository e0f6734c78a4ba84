//! Comfort scoring

use crate::models::WeatherStatistics;

const IDEAL_TEMPERATURE: f64 = 22.0;
const IDEAL_HUMIDITY: f64 = 50.0;
const CALM_WIND_SPEED: f64 = 10.0;

const MAX_TEMPERATURE_PENALTY: f64 = 40.0;
const MAX_HUMIDITY_PENALTY: f64 = 25.0;
const MAX_WIND_PENALTY: f64 = 25.0;
const MAX_RAIN_PENALTY: f64 = 10.0;

/// Score aggregate conditions from 0 (miserable) to 100 (ideal).
///
/// Starts at 100 and subtracts four independently capped penalties. The caps
/// sum to 100, so the worst case lands exactly on 0.
pub fn calculate_comfort_score(statistics: &WeatherStatistics) -> u8 {
    let temperature_penalty =
        ((statistics.avg_temperature - IDEAL_TEMPERATURE).abs() * 3.0).min(MAX_TEMPERATURE_PENALTY);

    let humidity_penalty =
        ((statistics.avg_humidity - IDEAL_HUMIDITY).abs() * 0.5).min(MAX_HUMIDITY_PENALTY);

    let wind_penalty = if statistics.avg_wind_speed <= CALM_WIND_SPEED {
        0.0
    } else {
        ((statistics.avg_wind_speed - CALM_WIND_SPEED) * 1.5).min(MAX_WIND_PENALTY)
    };

    let rain_penalty = (statistics.avg_rain_probability * 0.1).min(MAX_RAIN_PENALTY);

    let score = 100.0 - temperature_penalty - humidity_penalty - wind_penalty - rain_penalty;

    score.clamp(0.0, 100.0).round() as u8
}
