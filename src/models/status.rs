use std::fmt;

use serde::{Deserialize, Serialize};

use super::api_response::ApiResponse;

/// Position of the socket's relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayState {
    On,
    Off,
    /// Any value the firmware reports that is neither `on` nor `off`.
    #[serde(other)]
    Unknown,
}

impl RelayState {
    pub fn is_on(self) -> bool {
        self == RelayState::On
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelayState::On => "on",
            RelayState::Off => "off",
            RelayState::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Response of `/on`, `/off`, `/toggle` and `/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `"success"` or `"error"`.
    pub status: String,

    /// Relay state after the call. Missing when the device failed to switch.
    #[serde(default)]
    pub state: Option<RelayState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Device clock in Unix seconds, only sent by `/status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<i64>,
}

impl ApiResponse for StatusResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for StatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.state, &self.message) {
            (Some(state), _) => write!(f, "relay {} ({})", state, self.status),
            (None, Some(msg)) => write!(f, "{}: {}", self.status, msg),
            (None, None) => f.write_str(&self.status),
        }
    }
}
