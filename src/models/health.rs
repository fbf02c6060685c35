use serde::{Deserialize, Serialize};

use super::api_response::ApiResponse;

/// Envelope status of a live device.
pub const STATUS_ALIVE: &str = "alive";

/// Response of `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Device clock in Unix seconds.
    pub timestamp: i64,
}

impl HealthResponse {
    pub fn is_alive(&self) -> bool {
        self.status == STATUS_ALIVE
    }
}

impl ApiResponse for HealthResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> Option<&str> {
        None
    }
}
