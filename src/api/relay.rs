use crate::models::status::StatusResponse;
use crate::{SocketClient, SocketResult};

/// Provides methods for switching the socket's relay.
///
/// Every call answers with the relay state the device ends up in.
#[derive(Debug)]
pub struct RelayHandler {
    client: SocketClient,
}

impl RelayHandler {
    pub(crate) fn new(client: SocketClient) -> Self {
        Self { client }
    }

    /// Closes the relay (`GET /on`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use powersocket_client::SocketClient;
    /// #
    /// # async fn example(client: &SocketClient) -> Result<(), powersocket_client::SocketError> {
    /// let status = client.relay().turn_on().await?;
    /// println!("Relay is now {:?}", status.state);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn turn_on(&self) -> SocketResult<StatusResponse> {
        self.client.get(&["on"]).await
    }

    /// Opens the relay (`GET /off`).
    pub async fn turn_off(&self) -> SocketResult<StatusResponse> {
        self.client.get(&["off"]).await
    }

    /// Flips the relay (`GET /toggle`).
    pub async fn toggle(&self) -> SocketResult<StatusResponse> {
        self.client.get(&["toggle"]).await
    }

    /// Reads the relay state without switching it (`GET /status`).
    pub async fn status(&self) -> SocketResult<StatusResponse> {
        self.client.get(&["status"]).await
    }
}
