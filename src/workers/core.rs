//! Core worker utilities

use crate::consts::dashboard_consts::{EVENT_QUEUE_SIZE, UPDATE_QUEUE_SIZE};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::panels::{PanelId, PanelUpdate};
use tokio::sync::mpsc;

/// Sends activity events and panel updates to whoever renders them.
#[derive(Clone)]
pub struct EventSender {
    events: mpsc::Sender<Event>,
    updates: mpsc::Sender<PanelUpdate>,
}

impl EventSender {
    pub fn new(events: mpsc::Sender<Event>, updates: mpsc::Sender<PanelUpdate>) -> Self {
        Self { events, updates }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.events.send(event).await;
    }

    pub async fn send_panel_event(
        &self,
        panel: PanelId,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .events
            .send(Event::panel_with_level(
                panel, message, event_type, log_level,
            ))
            .await;
    }

    pub async fn send_refresh_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .events
            .send(Event::refresher_with_level(message, event_type, log_level))
            .await;
    }

    /// Send a region write. Dropped silently once the UI is gone.
    pub async fn send_update(&self, update: PanelUpdate) {
        let _ = self.updates.send(update).await;
    }
}

/// Creates an [`EventSender`] together with the receiving ends of both channels.
pub fn event_channels() -> (
    EventSender,
    mpsc::Receiver<Event>,
    mpsc::Receiver<PanelUpdate>,
) {
    let (event_tx, event_rx) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (update_tx, update_rx) = mpsc::channel::<PanelUpdate>(UPDATE_QUEUE_SIZE);
    (EventSender::new(event_tx, update_tx), event_rx, update_rx)
}
