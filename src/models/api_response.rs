/// Envelope status reported by the device on successful calls.
pub const STATUS_SUCCESS: &str = "success";

/// Envelope status reported by the device when a call failed on its side.
pub const STATUS_ERROR: &str = "error";

/// Common accessors for the JSON envelope every endpoint returns.
pub trait ApiResponse {
    /// Raw `status` field of the envelope.
    fn status(&self) -> &str;

    /// Human readable message, only set by the device on errors.
    fn message(&self) -> Option<&str>;

    /// Whether the device reported `"success"`.
    fn is_success(&self) -> bool {
        self.status() == STATUS_SUCCESS
    }

    /// Whether the device reported `"error"`.
    fn is_error(&self) -> bool {
        self.status() == STATUS_ERROR
    }
}
