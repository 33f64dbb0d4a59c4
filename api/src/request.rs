//! Request payloads and the form-input checks that guard them.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One sensor measurement as accepted by `POST /evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// Vehicles per minute.
    pub vpm: f64,
    /// Average speed in km/h.
    pub spd: f64,
    /// Vehicles per km.
    pub den: f64,
    pub expected: Option<String>,
}

impl SensorReading {
    /// Build a reading from raw form fields. Blank or non-finite values are rejected.
    pub fn parse(vpm: &str, spd: &str, den: &str) -> Result<Self, InputError> {
        Ok(Self {
            vpm: parse_number("Vehicles per minute", vpm)?,
            spd: parse_number("Speed", spd)?,
            den: parse_number("Density", den)?,
            expected: None,
        })
    }
}

/// Parse the sensor count for `POST /evaluate/{sensors}`.
pub fn parse_sensor_count(raw: &str) -> Result<u32, InputError> {
    match raw.trim().parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(InputError::SensorCount(raw.to_string())),
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            field,
            value: raw.to_string(),
        })
}
