use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::api_response::ApiResponse;

/// Energy record kept by the device.
///
/// `/energy` fills `energy`, `timestamp` and `cost`. `/stats/{period}` sends
/// only the aggregates for the window, in which case `energy` and `timestamp`
/// read as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyReading {
    /// Energy in kWh.
    #[serde(default)]
    pub energy: f32,
    /// Unix seconds. The device sends `0` when it has no history yet.
    #[serde(default)]
    pub timestamp: i64,
    /// Cost of the record at the tariff in force when it was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_total: Option<f32>,
    /// Part of `energy_total` used inside peak tariff hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_peak: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_offpeak: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_total: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_hours: Option<f32>,
    /// Average power in watts, only for `today`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_power: Option<f32>,
    /// Days with recorded usage, for `week` and `month`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_count: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_daily_avg: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_daily_avg: Option<f32>,
}

impl EnergyReading {
    /// When the record was taken, if the device has recorded anything.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp <= 0 {
            return None;
        }
        DateTime::<Utc>::from_timestamp(self.timestamp, 0)
    }
}

/// Response of `/energy` and `/stats/{period}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResponse {
    pub status: String,

    /// Window echoed back by `/stats/{period}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Absent when there is no history for the requested window.
    #[serde(default)]
    pub data: Option<EnergyReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse for EnergyResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Aggregation windows the firmware computes statistics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    Today,
    Yesterday,
    Week,
    Month,
}

impl StatsPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            StatsPeriod::Today => "today",
            StatsPeriod::Yesterday => "yesterday",
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
        }
    }
}

impl AsRef<str> for StatsPeriod {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
