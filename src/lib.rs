//! # powersocket-client
//!
//! A Rust client for the HTTP API of a Raspberry Pi based smart power socket.
//!
//! The socket firmware exposes a handful of GET endpoints: relay switching
//! (`/on`, `/off`, `/toggle`, `/status`), sensor readings (`/power`,
//! `/energy`, `/stats/{period}`) and a liveness probe (`/health`). This crate
//! binds each of them to a typed async call and ships a small [`Panel`] that
//! drives a two-button display from those calls.
//!
//! ## Example
//!
//! ```rust,no_run
//! use powersocket_client::{SocketClient, StatsPeriod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SocketClient::builder()
//!         .base_url("http://192.168.1.100:8080/")
//!         .build()?;
//!
//!     let status = client.relay().toggle().await?;
//!     println!("Relay: {status}");
//!
//!     if let Some(reading) = client.meter().power().await?.data {
//!         println!("Voltage: {} V", reading.voltage);
//!     }
//!
//!     let today = client.meter().stats(StatsPeriod::Today).await?;
//!     println!("Today: {:?}", today.data);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
pub mod models;
pub mod panel;

pub use api::meter::MeterHandler;
pub use api::relay::RelayHandler;
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{SocketClient, SocketClientBuilder, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use error::{SocketError, SocketResult};
pub use models::api_response::ApiResponse;
pub use models::energy::{EnergyReading, EnergyResponse, StatsPeriod};
pub use models::health::HealthResponse;
pub use models::power::{PowerReading, PowerResponse};
pub use models::status::{RelayState, StatusResponse};
pub use panel::{Panel, PanelEvent, SocketView};
