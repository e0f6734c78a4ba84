//! Validation utilities for weather observations and ingest messages
//!
//! Range rules mirror what the collector pipeline guarantees: humidity and
//! rain probability are percentages, wind speed is non-negative, and every
//! numeric value is finite.

use chrono::DateTime;
use thiserror::Error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::models::{Observation, WeatherMessage};

/// A field-level validation failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `weather.humidity`
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Order in which message fields are reported when several are invalid
const MESSAGE_FIELD_ORDER: &[&str] = &[
    "message",
    "timestamp",
    "location.city",
    "location.latitude",
    "location.longitude",
    "weather.temperature",
    "weather.humidity",
    "weather.windSpeed",
    "weather.condition",
    "weather.rainProbability",
    "source",
];

// ============================================================================
// Measurement Validations
// ============================================================================

/// Validate temperature is a finite number (negative values are fine)
pub fn validate_temperature(temperature: f64) -> Result<(), &'static str> {
    if !temperature.is_finite() {
        return Err("must be a finite number");
    }
    Ok(())
}

/// Validate humidity percentage is in 0-100
pub fn validate_humidity(humidity: f64) -> Result<(), &'static str> {
    validate_percentage(humidity)
}

/// Validate rain probability percentage is in 0-100
pub fn validate_rain_probability(rain_probability: f64) -> Result<(), &'static str> {
    validate_percentage(rain_probability)
}

/// Validate wind speed is non-negative
pub fn validate_wind_speed(wind_speed: f64) -> Result<(), &'static str> {
    if !wind_speed.is_finite() {
        return Err("must be a finite number");
    }
    if wind_speed < 0.0 {
        return Err("must be non-negative");
    }
    Ok(())
}

/// Validate latitude is in -90..=90
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude is in -180..=180
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("must be between -180 and 180");
    }
    Ok(())
}

fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("must be a finite number");
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("must be between 0 and 100");
    }
    Ok(())
}

/// Validate an observation before it is handed to the insights engine
pub fn validate_observation(observation: &Observation) -> Result<(), ValidationError> {
    validate_temperature(observation.temperature)
        .map_err(|m| ValidationError::new("temperature", m))?;
    validate_humidity(observation.humidity).map_err(|m| ValidationError::new("humidity", m))?;
    validate_wind_speed(observation.wind_speed)
        .map_err(|m| ValidationError::new("windSpeed", m))?;
    validate_rain_probability(observation.rain_probability)
        .map_err(|m| ValidationError::new("rainProbability", m))?;
    Ok(())
}

// ============================================================================
// Ingest Message Validations
// ============================================================================

/// Parse and validate a raw JSON weather message
pub fn parse_weather_message(raw: &str) -> Result<WeatherMessage, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::new("message", "empty message"));
    }

    let message: WeatherMessage = serde_json::from_str(raw)
        .map_err(|e| ValidationError::new("message", format!("invalid JSON format: {}", e)))?;

    validate_weather_message(&message)?;
    Ok(message)
}

/// Validate a weather message, reporting the first failing field
pub fn validate_weather_message(message: &WeatherMessage) -> Result<(), ValidationError> {
    match collect_message_errors(message).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Collect every failing field of a weather message, in reporting order
pub fn collect_message_errors(message: &WeatherMessage) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(validation_errors) = message.validate() {
        flatten_errors(&validation_errors, "", &mut errors);
    }

    if !message.timestamp.is_empty() && DateTime::parse_from_rfc3339(&message.timestamp).is_err()
    {
        errors.push(ValidationError::new(
            "timestamp",
            "invalid format, expected RFC3339",
        ));
    }

    let numeric_checks = [
        ("location.latitude", validate_latitude(message.location.latitude)),
        ("location.longitude", validate_longitude(message.location.longitude)),
        ("weather.temperature", validate_temperature(message.weather.temperature)),
        ("weather.humidity", validate_humidity(message.weather.humidity)),
        ("weather.windSpeed", validate_wind_speed(message.weather.wind_speed)),
        (
            "weather.rainProbability",
            validate_rain_probability(message.weather.rain_probability),
        ),
    ];
    for (field, result) in numeric_checks {
        if let Err(msg) = result {
            // The derive may already have flagged this field
            if !errors.iter().any(|e| e.field == field) {
                errors.push(ValidationError::new(field, msg));
            }
        }
    }

    errors.sort_by_key(|e| field_rank(&e.field));
    errors
}

/// Check a raw message without keeping the parsed result
pub fn is_valid_weather_message(raw: &str) -> bool {
    parse_weather_message(raw).is_ok()
}

fn field_rank(field: &str) -> usize {
    MESSAGE_FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(MESSAGE_FIELD_ORDER.len())
}

/// Flatten nested `validator` errors into dotted, camelCase field paths
fn flatten_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ValidationError>) {
    for (name, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            to_camel_case(name)
        } else {
            format!("{}.{}", prefix, to_camel_case(name))
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    out.push(ValidationError::new(path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_errors(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn valid_message_json() -> String {
        r#"{
            "timestamp": "2024-01-15T10:00:00Z",
            "location": {"city": "São Paulo", "latitude": -23.5505, "longitude": -46.6333},
            "weather": {
                "temperature": 25.5,
                "humidity": 65,
                "windSpeed": 12.3,
                "condition": "Partly cloudy",
                "rainProbability": 30
            },
            "source": "open-meteo"
        }"#
        .to_string()
    }

    fn valid_message() -> WeatherMessage {
        serde_json::from_str(&valid_message_json()).unwrap()
    }

    // ========================================================================
    // Measurement Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_humidity() {
        assert!(validate_humidity(0.0).is_ok());
        assert!(validate_humidity(65.0).is_ok());
        assert!(validate_humidity(100.0).is_ok());
        assert!(validate_humidity(-0.1).is_err());
        assert!(validate_humidity(100.1).is_err());
        assert!(validate_humidity(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_wind_speed() {
        assert!(validate_wind_speed(0.0).is_ok());
        assert!(validate_wind_speed(120.0).is_ok());
        assert_eq!(validate_wind_speed(-1.0), Err("must be non-negative"));
        assert!(validate_wind_speed(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_temperature() {
        assert!(validate_temperature(-30.0).is_ok());
        assert!(validate_temperature(45.0).is_ok());
        assert!(validate_temperature(f64::NAN).is_err());
        assert!(validate_temperature(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(90.5).is_err());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
    }

    #[test]
    fn test_validate_observation() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert!(validate_observation(&Observation::new(ts, 25.0, 60.0, 10.0, 20.0)).is_ok());

        let err = validate_observation(&Observation::new(ts, 25.0, 120.0, 10.0, 20.0)).unwrap_err();
        assert_eq!(err.field, "humidity");

        let err = validate_observation(&Observation::new(ts, 25.0, 60.0, 10.0, -5.0)).unwrap_err();
        assert_eq!(err.field, "rainProbability");
    }

    // ========================================================================
    // Message Validation Tests
    // ========================================================================

    #[test]
    fn test_parse_valid_message() {
        let message = parse_weather_message(&valid_message_json()).unwrap();
        assert_eq!(message.location.city, "São Paulo");
        assert_eq!(message.weather.wind_speed, 12.3);
        assert_eq!(message.source, "open-meteo");
    }

    #[test]
    fn test_parse_empty_message() {
        let err = parse_weather_message("   ").unwrap_err();
        assert_eq!(err.message, "empty message");
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_weather_message("{not json").unwrap_err();
        assert_eq!(err.field, "message");
        assert!(err.message.starts_with("invalid JSON format"));
    }

    #[test]
    fn test_missing_timestamp() {
        let mut message = valid_message();
        message.timestamp = String::new();
        let err = validate_weather_message(&message).unwrap_err();
        assert_eq!(err, ValidationError::new("timestamp", "required field is missing"));
    }

    #[test]
    fn test_non_rfc3339_timestamp() {
        let mut message = valid_message();
        message.timestamp = "15/01/2024 10:00".to_string();
        let err = validate_weather_message(&message).unwrap_err();
        assert_eq!(err.field, "timestamp");
        assert_eq!(err.message, "invalid format, expected RFC3339");
    }

    #[test]
    fn test_missing_city() {
        let mut message = valid_message();
        message.location.city = String::new();
        let err = validate_weather_message(&message).unwrap_err();
        assert_eq!(err.field, "location.city");
    }

    #[test]
    fn test_out_of_range_weather_fields() {
        let mut message = valid_message();
        message.weather.humidity = 101.0;
        assert_eq!(
            validate_weather_message(&message).unwrap_err(),
            ValidationError::new("weather.humidity", "must be between 0 and 100")
        );

        let mut message = valid_message();
        message.weather.wind_speed = -3.0;
        assert_eq!(
            validate_weather_message(&message).unwrap_err().field,
            "weather.windSpeed"
        );

        let mut message = valid_message();
        message.weather.rain_probability = 150.0;
        assert_eq!(
            validate_weather_message(&message).unwrap_err().field,
            "weather.rainProbability"
        );
    }

    #[test]
    fn test_missing_source_and_condition() {
        let mut message = valid_message();
        message.source = String::new();
        message.weather.condition = String::new();

        let errors = collect_message_errors(&message);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["weather.condition", "source"]);
    }

    #[test]
    fn test_errors_reported_in_field_order() {
        let mut message = valid_message();
        message.source = String::new();
        message.location.latitude = 95.0;
        message.weather.humidity = -1.0;

        let errors = collect_message_errors(&message);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["location.latitude", "weather.humidity", "source"]);
        assert_eq!(validate_weather_message(&message).unwrap_err().field, "location.latitude");
    }

    #[test]
    fn test_missing_fields_are_reported_not_parse_errors() {
        let err = parse_weather_message(r#"{"timestamp": "2024-01-15T10:00:00Z"}"#).unwrap_err();
        assert_eq!(err.field, "location.city");
    }

    #[test]
    fn test_message_into_observation() {
        let message = valid_message();
        assert_eq!(message.coordinates().latitude, -23.5505);

        let observation = message.into_observation().unwrap();
        assert_eq!(
            observation.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
        );
        assert_eq!(observation.temperature, 25.5);
        assert_eq!(observation.humidity, 65.0);
        assert_eq!(observation.rain_probability, 30.0);
        assert_eq!(observation.location.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_message_with_offset_converts_to_utc() {
        let mut message = valid_message();
        message.timestamp = "2024-01-15T07:00:00-03:00".to_string();
        let observation = message.into_observation().unwrap();
        assert_eq!(
            observation.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_is_valid_weather_message() {
        assert!(is_valid_weather_message(&valid_message_json()));
        assert!(!is_valid_weather_message(""));
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("wind_speed"), "windSpeed");
        assert_eq!(to_camel_case("rain_probability"), "rainProbability");
        assert_eq!(to_camel_case("city"), "city");
    }
}
