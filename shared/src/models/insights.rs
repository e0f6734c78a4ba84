//! Weather insights report models

use serde::{Deserialize, Serialize};

use crate::types::TimeRange;

/// Aggregate numeric summary over a set of observations
///
/// Averages are rounded to two decimal places; extremes are raw values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherStatistics {
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub avg_wind_speed: f64,
    pub avg_rain_probability: f64,
    pub max_temperature: f64,
    pub min_temperature: f64,
}

/// Direction of change between the first and second half of a window
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature and humidity trends for a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherTrends {
    pub temperature_trend: Trend,
    pub humidity_trend: Trend,
}

/// Coarse comfort category derived from average temperature
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureClassification {
    /// Below 10°C
    Cold,
    /// 10°C up to 18°C
    Cool,
    /// 18°C up to 25°C
    Pleasant,
    /// 25°C up to 32°C
    Warm,
    /// 32°C and above
    Hot,
}

impl TemperatureClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureClassification::Cold => "cold",
            TemperatureClassification::Cool => "cool",
            TemperatureClassification::Pleasant => "pleasant",
            TemperatureClassification::Warm => "warm",
            TemperatureClassification::Hot => "hot",
        }
    }
}

impl std::fmt::Display for TemperatureClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold-triggered warning about extreme conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAlert {
    ExtremeHeat,
    Freezing,
    HighRain,
    StrongWind,
    HighHumidity,
}

impl WeatherAlert {
    /// Human-readable label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            WeatherAlert::ExtremeHeat => "extreme heat",
            WeatherAlert::Freezing => "freezing",
            WeatherAlert::HighRain => "high rain",
            WeatherAlert::StrongWind => "strong wind",
            WeatherAlert::HighHumidity => "high humidity",
        }
    }
}

impl std::fmt::Display for WeatherAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Insights computed over one query's observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub period: TimeRange,
    pub location_name: Option<String>,
    pub statistics: WeatherStatistics,
    pub trends: WeatherTrends,
    pub classification: TemperatureClassification,
    pub alerts: Vec<WeatherAlert>,
    pub comfort_score: u8,
    pub summary: String,
    pub data_points: usize,
}
