use http::StatusCode;
use thiserror::Error;

/// Error types for the power socket client.
#[derive(Error, Debug)]
pub enum SocketError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path or path segment is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error deserializing the JSON body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The device rejected the API key (or none was sent).
    #[error("Unauthorized")]
    Unauthorized,

    /// The device answered with a non-2xx status.
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for power socket API operations.
pub type SocketResult<T> = Result<T, SocketError>;
