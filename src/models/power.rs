use std::fmt;

use serde::{Deserialize, Serialize};

use super::api_response::ApiResponse;

/// Instantaneous electrical reading taken by the socket's sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerReading {
    /// Volts.
    pub voltage: f32,
    /// Amperes.
    pub current: f32,
    /// Active power in watts.
    pub power: f32,
    /// Accumulated energy in kWh.
    pub energy: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparent_power: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactive_power: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_factor: Option<f32>,
    /// Mains frequency in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f32>,
    /// Board temperature in degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Response of `/power`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerResponse {
    pub status: String,

    /// Missing when the sensor could not be read.
    #[serde(default)]
    pub data: Option<PowerReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse for PowerResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for PowerReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} V, {} A, {} W, {} kWh",
            self.voltage, self.current, self.power, self.energy
        )
    }
}
