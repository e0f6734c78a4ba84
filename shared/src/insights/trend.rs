//! Two-bucket trend detection

use crate::models::{Observation, Trend, WeatherTrends};

use super::statistics::mean_of;
use super::InsightsThresholds;

impl Trend {
    /// Classify a second-half minus first-half difference against a tolerance
    pub fn from_difference(difference: f64, threshold: f64) -> Self {
        if difference > threshold {
            Trend::Rising
        } else if difference < -threshold {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }
}

/// Detect temperature and humidity trends with the default tolerances.
pub fn detect_trends(observations: &[Observation]) -> WeatherTrends {
    detect_trends_with(observations, &InsightsThresholds::default())
}

/// Detect trends by comparing the mean of each half of the window.
///
/// The split point is `n / 2`, so an odd element lands in the second half.
/// Fewer than two observations are always stable.
pub fn detect_trends_with(
    observations: &[Observation],
    thresholds: &InsightsThresholds,
) -> WeatherTrends {
    if observations.len() < 2 {
        return WeatherTrends::default();
    }

    let (first_half, second_half) = observations.split_at(observations.len() / 2);

    let temperature_diff =
        mean_of(second_half, |o| o.temperature) - mean_of(first_half, |o| o.temperature);
    let humidity_diff =
        mean_of(second_half, |o| o.humidity) - mean_of(first_half, |o| o.humidity);

    WeatherTrends {
        temperature_trend: Trend::from_difference(temperature_diff, thresholds.temperature_trend),
        humidity_trend: Trend::from_difference(humidity_diff, thresholds.humidity_trend),
    }
}
