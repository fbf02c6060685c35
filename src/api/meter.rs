use crate::models::energy::EnergyResponse;
use crate::models::power::PowerResponse;
use crate::{SocketClient, SocketError, SocketResult};

/// Provides methods for reading the socket's power sensor and energy history.
#[derive(Debug)]
pub struct MeterHandler {
    client: SocketClient,
}

impl MeterHandler {
    pub(crate) fn new(client: SocketClient) -> Self {
        Self { client }
    }

    /// Reads the instantaneous voltage, current, power and energy
    /// (`GET /power`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use powersocket_client::SocketClient;
    /// #
    /// # async fn example(client: &SocketClient) -> Result<(), powersocket_client::SocketError> {
    /// if let Some(reading) = client.meter().power().await?.data {
    ///     println!("Voltage: {} V", reading.voltage);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn power(&self) -> SocketResult<PowerResponse> {
        self.client.get(&["power"]).await
    }

    /// Reads the latest energy record (`GET /energy`).
    pub async fn energy(&self) -> SocketResult<EnergyResponse> {
        self.client.get(&["energy"]).await
    }

    /// Reads the energy record for a period (`GET /stats/{period}`).
    ///
    /// `period` is sent as a single path segment. Pass a
    /// [`StatsPeriod`](crate::StatsPeriod) for the windows the firmware
    /// knows; other strings are forwarded as-is.
    ///
    /// # Errors
    ///
    /// Returns `SocketError::InvalidEndpoint` for a blank period without
    /// contacting the device.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use powersocket_client::{SocketClient, StatsPeriod};
    /// #
    /// # async fn example(client: &SocketClient) -> Result<(), powersocket_client::SocketError> {
    /// let week = client.meter().stats(StatsPeriod::Week).await?;
    /// let day = client.meter().stats("day").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn stats(&self, period: impl AsRef<str>) -> SocketResult<EnergyResponse> {
        let period = period.as_ref();
        if period.trim().is_empty() {
            return Err(SocketError::InvalidEndpoint("stats period must not be empty".into()));
        }
        self.client.get(&["stats", period]).await
    }
}
