//! Threshold-based weather alerts

use crate::models::{Observation, WeatherAlert, WeatherStatistics};

use super::InsightsThresholds;

/// Generate alerts with the default thresholds.
pub fn generate_alerts(
    observations: &[Observation],
    statistics: &WeatherStatistics,
) -> Vec<WeatherAlert> {
    generate_alerts_with(observations, statistics, &InsightsThresholds::default())
}

/// Evaluate every alert rule independently.
///
/// Output follows rule order (heat, freezing, rain, wind, humidity), not
/// severity. Rain and wind look at single observations; the rest use the
/// aggregate statistics.
pub fn generate_alerts_with(
    observations: &[Observation],
    statistics: &WeatherStatistics,
    thresholds: &InsightsThresholds,
) -> Vec<WeatherAlert> {
    let mut alerts = Vec::new();

    if statistics.max_temperature >= thresholds.extreme_heat {
        alerts.push(WeatherAlert::ExtremeHeat);
    }

    if statistics.min_temperature <= thresholds.freezing {
        alerts.push(WeatherAlert::Freezing);
    }

    if observations
        .iter()
        .any(|o| o.rain_probability >= thresholds.high_rain)
    {
        alerts.push(WeatherAlert::HighRain);
    }

    if observations
        .iter()
        .any(|o| o.wind_speed >= thresholds.strong_wind)
    {
        alerts.push(WeatherAlert::StrongWind);
    }

    if statistics.avg_humidity >= thresholds.high_humidity {
        alerts.push(WeatherAlert::HighHumidity);
    }

    alerts
}
