//! Weather observation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single recorded weather measurement at a place and time
///
/// Units: temperature in °C, humidity and rain probability in percent,
/// wind speed in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub rain_probability: f64,
    /// City/state label, only used to label reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Observation {
    pub fn new(
        timestamp: DateTime<Utc>,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        rain_probability: f64,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            humidity,
            wind_speed,
            rain_probability,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Weather message as published by the collector pipeline
///
/// Missing fields deserialize to their empty defaults so that validation,
/// not JSON parsing, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WeatherMessage {
    /// RFC3339 timestamp of the measurement
    #[validate(length(min = 1, message = "required field is missing"))]
    pub timestamp: String,
    #[validate]
    pub location: MessageLocation,
    #[validate]
    pub weather: MessageWeather,
    #[validate(length(min = 1, message = "required field is missing"))]
    pub source: String,
}

/// Location block of a [`WeatherMessage`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MessageLocation {
    #[validate(length(min = 1, message = "required field is missing"))]
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Measurement block of a [`WeatherMessage`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageWeather {
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub humidity: f64,
    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub wind_speed: f64,
    #[validate(length(min = 1, message = "required field is missing"))]
    pub condition: String,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub rain_probability: f64,
}

impl WeatherMessage {
    /// Convert a validated message into an engine observation.
    ///
    /// Returns `None` when the timestamp is not RFC3339; run
    /// [`crate::validate_weather_message`] first to get a field-level error.
    pub fn into_observation(self) -> Option<Observation> {
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()?
            .with_timezone(&Utc);

        Some(Observation {
            timestamp,
            temperature: self.weather.temperature,
            humidity: self.weather.humidity,
            wind_speed: self.weather.wind_speed,
            rain_probability: self.weather.rain_probability,
            location: Some(self.location.city),
        })
    }

    /// Coordinates carried by the message
    pub fn coordinates(&self) -> crate::types::GpsCoordinates {
        crate::types::GpsCoordinates::new(self.location.latitude, self.location.longitude)
    }
}
