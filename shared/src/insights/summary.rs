//! Natural-language summary

use crate::models::{TemperatureClassification, WeatherAlert, WeatherStatistics, WeatherTrends};

/// Assemble the one-paragraph summary for a report.
///
/// Always names the classification, average temperature, temperature trend,
/// average humidity and average wind speed; appends an `Alerts:` clause only
/// when there are alerts.
pub fn generate_summary(
    classification: TemperatureClassification,
    trends: &WeatherTrends,
    statistics: &WeatherStatistics,
    alerts: &[WeatherAlert],
) -> String {
    let mut summary = format!(
        "Conditions were {} with an average temperature of {:.1}°C and a {} temperature trend. \
         Average humidity was {:.1}% and average wind speed was {:.1} km/h.",
        classification,
        statistics.avg_temperature,
        trends.temperature_trend,
        statistics.avg_humidity,
        statistics.avg_wind_speed,
    );

    if !alerts.is_empty() {
        let labels: Vec<&str> = alerts.iter().map(WeatherAlert::label).collect();
        summary.push_str(&format!(" Alerts: {}.", labels.join(", ")));
    }

    summary
}
