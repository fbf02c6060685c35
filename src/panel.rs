//! Two-button control panel for the socket.
//!
//! The panel mirrors the device's companion screen: a power button that
//! toggles the relay, a stats button that fetches the current reading, a
//! voltage label and an on/off indicator. Each press runs one request on a
//! background task; the result comes back over a channel and is applied to the
//! [`SocketView`] by whoever owns the [`Panel`].
//!
//! Failed requests never reach the view. They are logged and dropped, so the
//! widgets keep showing the last successful response.

use log::{debug, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::models::status::RelayState;
use crate::SocketClient;

/// Display surface updated by a [`Panel`].
pub trait SocketView {
    /// Replaces the voltage label.
    fn show_voltage(&mut self, text: &str);

    /// Recolours the status indicator. Anything but `On` is shown as off.
    fn show_relay_state(&mut self, state: RelayState);
}

/// Completed request waiting to be applied to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    Relay(RelayState),
    Voltage(f32),
}

/// Label text for a voltage reading.
pub fn voltage_text(voltage: f32) -> String {
    format!("Voltage: {voltage} V")
}

pub struct Panel<V> {
    client: SocketClient,
    view: V,
    events_tx: UnboundedSender<PanelEvent>,
    events_rx: UnboundedReceiver<PanelEvent>,
}

impl<V: SocketView> Panel<V> {
    pub fn new(client: SocketClient, view: V) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            view,
            events_tx,
            events_rx,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Power button: toggles the relay in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn press_power(&self) -> JoinHandle<()> {
        let relay = self.client.relay();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            match relay.toggle().await {
                Ok(response) => match response.state {
                    Some(state) => deliver(&tx, PanelEvent::Relay(state)),
                    None => debug!("toggle answered without a relay state: {response}"),
                },
                Err(e) => warn!("toggle request failed: {e}"),
            }
        })
    }

    /// Stats button: fetches the current power reading in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn press_stats(&self) -> JoinHandle<()> {
        let meter = self.client.meter();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            match meter.power().await {
                Ok(response) => match response.data {
                    Some(reading) => deliver(&tx, PanelEvent::Voltage(reading.voltage)),
                    None => debug!("power answered without data (status {})", response.status),
                },
                Err(e) => warn!("power request failed: {e}"),
            }
        })
    }

    /// Applies every completed request without waiting. Returns how many
    /// updates reached the view.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completed request and applies it.
    pub async fn next_event(&mut self) -> Option<PanelEvent> {
        let event = self.events_rx.recv().await?;
        self.apply(event);
        Some(event)
    }

    fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Relay(state) => self.view.show_relay_state(state),
            PanelEvent::Voltage(voltage) => self.view.show_voltage(&voltage_text(voltage)),
        }
    }
}

fn deliver(tx: &UnboundedSender<PanelEvent>, event: PanelEvent) {
    if tx.send(event).is_err() {
        debug!("panel closed, dropping {event:?}");
    }
}
