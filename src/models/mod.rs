//! Data models for the power socket API.
//!
//! Every endpoint answers with a small JSON envelope carrying a `status`
//! string and, depending on the endpoint, a relay state or a `data` object.

pub mod api_response;
pub mod energy;
pub mod health;
pub mod power;
pub mod status;
