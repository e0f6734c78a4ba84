//! Weather insights engine
//!
//! Turns a time-ordered slice of observations into an [`InsightsReport`].
//! Each step is a pure function and runs in data-dependency order:
//! statistics, trends, classification, alerts, comfort score, summary.
//!
//! Callers are expected to filter and sort observations ascending by
//! timestamp before calling in; the engine never re-sorts.

mod alerts;
mod classification;
mod comfort;
mod statistics;
mod summary;
mod trend;

pub use alerts::*;
pub use classification::*;
pub use comfort::*;
pub use statistics::*;
pub use summary::*;
pub use trend::*;

use serde::{Deserialize, Serialize};

use crate::models::{InsightsReport, Observation};
use crate::types::TimeRange;

/// Mean temperature change (°C) between halves that counts as a trend
pub const TEMPERATURE_TREND_THRESHOLD: f64 = 2.0;
/// Mean humidity change (percentage points) between halves that counts as a trend
pub const HUMIDITY_TREND_THRESHOLD: f64 = 5.0;
/// Maximum temperature (°C) at or above which extreme heat is raised
pub const EXTREME_HEAT_THRESHOLD: f64 = 35.0;
/// Minimum temperature (°C) at or below which freezing is raised
pub const FREEZING_THRESHOLD: f64 = 0.0;
/// Rain probability (%) of any single observation that raises high rain
pub const HIGH_RAIN_THRESHOLD: f64 = 70.0;
/// Wind speed (km/h) of any single observation that raises strong wind
pub const STRONG_WIND_THRESHOLD: f64 = 50.0;
/// Average humidity (%) at or above which high humidity is raised
pub const HIGH_HUMIDITY_THRESHOLD: f64 = 85.0;

/// Trend tolerances and alert thresholds used by the engine
///
/// `Default` matches the engine's built-in constants. Fields missing from a
/// deserialized config fall back to those constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsThresholds {
    pub temperature_trend: f64,
    pub humidity_trend: f64,
    pub extreme_heat: f64,
    pub freezing: f64,
    pub high_rain: f64,
    pub strong_wind: f64,
    pub high_humidity: f64,
}

impl Default for InsightsThresholds {
    fn default() -> Self {
        Self {
            temperature_trend: TEMPERATURE_TREND_THRESHOLD,
            humidity_trend: HUMIDITY_TREND_THRESHOLD,
            extreme_heat: EXTREME_HEAT_THRESHOLD,
            freezing: FREEZING_THRESHOLD,
            high_rain: HIGH_RAIN_THRESHOLD,
            strong_wind: STRONG_WIND_THRESHOLD,
            high_humidity: HIGH_HUMIDITY_THRESHOLD,
        }
    }
}

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build an insights report with the default thresholds.
///
/// Returns `None` for an empty slice: nothing to analyze is not an error.
pub fn get_insights(
    observations: &[Observation],
    location_name: Option<&str>,
) -> Option<InsightsReport> {
    get_insights_with(observations, location_name, &InsightsThresholds::default())
}

/// Build an insights report with caller-supplied thresholds.
pub fn get_insights_with(
    observations: &[Observation],
    location_name: Option<&str>,
    thresholds: &InsightsThresholds,
) -> Option<InsightsReport> {
    let start = observations.iter().map(|o| o.timestamp).min()?;
    let end = observations.iter().map(|o| o.timestamp).max()?;

    let statistics = calculate_statistics(observations);
    let trends = detect_trends_with(observations, thresholds);
    let classification = classify_temperature(statistics.avg_temperature);
    let alerts = generate_alerts_with(observations, &statistics, thresholds);
    let comfort_score = calculate_comfort_score(&statistics);
    let summary = generate_summary(classification, &trends, &statistics, &alerts);

    Some(InsightsReport {
        period: TimeRange::new(start, end),
        location_name: location_name.map(str::to_owned),
        statistics,
        trends,
        classification,
        alerts,
        comfort_score,
        summary,
        data_points: observations.len(),
    })
}


#[cfg(test)]
mod tests {
    use chrono::Duration;

    use proptest::prelude::*;

    use super::test_support::*;
    use super::*;
    use crate::models::{TemperatureClassification, Trend, WeatherAlert};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn property_round2_is_within_half_a_cent(value in -1.0e6f64..1.0e6) {
            let rounded = round2(value);

            prop_assert!((rounded - value).abs() <= 0.005 + 1e-9);
            prop_assert_eq!(round2(rounded), rounded);
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(25.0), 25.0);
        assert_eq!(round2(21.666666), 21.67);
        assert_eq!(round2(-3.333333), -3.33);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_default_thresholds_match_constants() {
        let t = InsightsThresholds::default();
        assert_eq!(t.temperature_trend, 2.0);
        assert_eq!(t.humidity_trend, 5.0);
        assert_eq!(t.extreme_heat, 35.0);
        assert_eq!(t.freezing, 0.0);
        assert_eq!(t.high_rain, 70.0);
        assert_eq!(t.strong_wind, 50.0);
        assert_eq!(t.high_humidity, 85.0);
    }

    #[test]
    fn test_thresholds_partial_deserialize() {
        let t: InsightsThresholds = serde_json::from_str(r#"{"extreme_heat": 30.0}"#).unwrap();
        assert_eq!(t.extreme_heat, 30.0);
        assert_eq!(t.strong_wind, STRONG_WIND_THRESHOLD);
    }

    #[test]
    fn test_get_insights_empty_is_none() {
        assert!(get_insights(&[], Some("São Paulo")).is_none());
    }

    #[test]
    fn test_get_insights_assembles_report() {
        let observations = hourly(&[
            (20.0, 60.0, 10.0, 20.0),
            (25.0, 70.0, 15.0, 30.0),
            (30.0, 80.0, 20.0, 40.0),
        ]);

        let report = get_insights(&observations, Some("São Paulo, SP")).unwrap();

        assert_eq!(report.period.start, base_time());
        assert_eq!(report.period.end, base_time() + Duration::hours(2));
        assert_eq!(report.location_name.as_deref(), Some("São Paulo, SP"));
        assert_eq!(report.data_points, 3);
        assert_eq!(report.statistics.avg_temperature, 25.0);
        assert_eq!(report.classification, TemperatureClassification::Warm);
        // First half [20], second half [25, 30]
        assert_eq!(report.trends.temperature_trend, Trend::Rising);
        assert_eq!(report.trends.humidity_trend, Trend::Rising);
        assert!(report.alerts.is_empty());
        assert!(report.summary.contains("warm"));
        assert!(report.comfort_score <= 100);
    }

    #[test]
    fn test_get_insights_period_ignores_order() {
        let mut observations = temperatures(&[18.0, 19.0, 20.0]);
        observations.reverse();

        let report = get_insights(&observations, None).unwrap();

        assert_eq!(report.period.start, base_time());
        assert_eq!(report.period.end, base_time() + Duration::hours(2));
        assert!(report.location_name.is_none());
    }

    #[test]
    fn test_get_insights_single_observation() {
        let observations = temperatures(&[36.0]);

        let report = get_insights(&observations, None).unwrap();

        assert_eq!(report.data_points, 1);
        assert_eq!(report.period.start, report.period.end);
        assert_eq!(report.trends, Default::default());
        assert_eq!(report.alerts, vec![WeatherAlert::ExtremeHeat]);
        assert!(report.summary.contains("Alerts: extreme heat."));
    }

    #[test]
    fn test_get_insights_with_custom_thresholds() {
        let observations = temperatures(&[31.0, 32.0]);
        let thresholds = InsightsThresholds {
            extreme_heat: 30.0,
            ..Default::default()
        };

        let default_report = get_insights(&observations, None).unwrap();
        let custom_report = get_insights_with(&observations, None, &thresholds).unwrap();

        assert!(default_report.alerts.is_empty());
        assert_eq!(custom_report.alerts, vec![WeatherAlert::ExtremeHeat]);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = get_insights(&temperatures(&[22.0, 23.0]), Some("Campinas")).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["locationName"], "Campinas");
        assert_eq!(json["dataPoints"], 2);
        assert_eq!(json["classification"], "pleasant");
        assert_eq!(json["trends"]["temperatureTrend"], "stable");
        assert!(json["statistics"]["avgTemperature"].is_number());
        assert!(json["comfortScore"].is_number());
    }
}
