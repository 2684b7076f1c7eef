//! Dashboard panels
//!
//! Every panel owns one endpoint and one region of the dashboard. A refresh
//! fetches the endpoint, turns the payload into a typed view-model and
//! publishes it as a [`PanelUpdate`]; the UI then replaces the panel's region
//! with it. Failures are published too, as the panel's fallback message, so a
//! refresh never fails past the panel itself.

use crate::api::MacroApi;
use crate::api::error::ApiError;
use crate::consts::dashboard_consts::fallback;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::workers::core::EventSender;
use chrono::Local;
use std::sync::Arc;

pub mod calendar;
pub mod health;
pub mod indices;
pub mod orientation;
pub mod sentiment;
pub mod snapshot;

pub use calendar::{CalendarEvent, CalendarPanel};
pub use health::{HealthPanel, HealthStatus};
pub use indices::{IndexRow, IndicesPanel};
pub use orientation::{OrientationPanel, OrientationView};
pub use sentiment::{SentimentGrid, SentimentGridPanel};
pub use snapshot::{RegimeSnapshot, SnapshotPanel, SnapshotSource};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, strum::Display)]
pub enum PanelId {
    Snapshot,
    Orientation,
    Indices,
    Calendar,
    SentimentGrid,
    Health,
}

impl PanelId {
    /// Every panel, in display order.
    #[cfg(test)]
    pub const ALL: [PanelId; 6] = [
        PanelId::Snapshot,
        PanelId::Orientation,
        PanelId::Indices,
        PanelId::Calendar,
        PanelId::SentimentGrid,
        PanelId::Health,
    ];

    /// Title of the panel's region.
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Snapshot => "RÉGIME MACRO",
            PanelId::Orientation => "ORIENTATION",
            PanelId::Indices => "INDICES",
            PanelId::Calendar => "CALENDRIER ÉCO",
            PanelId::SentimentGrid => "SENTIMENT NEWS",
            PanelId::Health => "API",
        }
    }

    /// Message rendered in place of the panel's content when its fetch fails.
    pub fn fallback(&self) -> &'static str {
        match self {
            PanelId::Snapshot => fallback::SNAPSHOT,
            PanelId::Orientation => fallback::ORIENTATION,
            PanelId::Indices => fallback::INDICES,
            PanelId::Calendar => fallback::CALENDAR,
            PanelId::SentimentGrid => fallback::SENTIMENT_GRID,
            PanelId::Health => fallback::HEALTH,
        }
    }
}

/// Complete content of one panel region.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Snapshot(RegimeSnapshot),
    Orientation(OrientationView),
    Indices(Vec<IndexRow>),
    Calendar(Vec<CalendarEvent>),
    SentimentGrid(SentimentGrid),
    Health(HealthStatus),
    /// The fetch failed; holds the panel's fallback message.
    Unavailable(&'static str),
}

/// A region write: `body` replaces whatever `panel` showed before.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelUpdate {
    pub panel: PanelId,
    pub body: PanelBody,
    /// Local wall-clock time the update was produced, `HH:MM:SS`.
    pub produced_at: String,
}

impl PanelUpdate {
    pub fn new(panel: PanelId, body: PanelBody) -> Self {
        Self {
            panel,
            body,
            produced_at: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// A dashboard panel bound to one endpoint and one region.
#[async_trait::async_trait]
pub trait Panel: Send + Sync {
    fn id(&self) -> PanelId;

    /// Fetches the panel's endpoint and publishes the result. Never fails.
    async fn refresh(&self);
}

/// What every panel needs to fetch and publish.
#[derive(Clone)]
pub struct PanelContext {
    api: Arc<dyn MacroApi>,
    sender: EventSender,
    classifier: ErrorClassifier,
}

impl PanelContext {
    pub fn new(api: Arc<dyn MacroApi>, sender: EventSender) -> Self {
        Self {
            api,
            sender,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn api(&self) -> &dyn MacroApi {
        self.api.as_ref()
    }

    /// Publishes a fetch result into `panel`'s region.
    ///
    /// On error the region receives the panel's fallback message and the
    /// failure goes to the log and the activity stream.
    pub async fn publish(&self, panel: PanelId, result: Result<PanelBody, ApiError>) {
        match result {
            Ok(body) => {
                self.sender
                    .send_update(PanelUpdate::new(panel, body))
                    .await;
                self.sender
                    .send_panel_event(
                        panel,
                        format!("{} refreshed", panel),
                        EventType::Success,
                        LogLevel::Debug,
                    )
                    .await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                log::log!(log::Level::from(log_level), "{} refresh failed: {}", panel, e);
                self.sender
                    .send_update(PanelUpdate::new(
                        panel,
                        PanelBody::Unavailable(panel.fallback()),
                    ))
                    .await;
                self.sender
                    .send_panel_event(
                        panel,
                        format!("{} {}", panel.fallback(), e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::events::Event;
    use crate::workers::core::event_channels;
    use tokio::sync::mpsc;

    /// Channels wired to a fresh context, for driving a single panel.
    pub fn context_with(
        api: impl MacroApi + 'static,
    ) -> (
        PanelContext,
        mpsc::Receiver<Event>,
        mpsc::Receiver<PanelUpdate>,
    ) {
        let (sender, events, updates) = event_channels();
        (PanelContext::new(Arc::new(api), sender), events, updates)
    }

    /// Drains every update currently queued.
    pub fn drain_updates(updates: &mut mpsc::Receiver<PanelUpdate>) -> Vec<PanelUpdate> {
        let mut all = Vec::new();
        while let Ok(update) = updates.try_recv() {
            all.push(update);
        }
        all
    }
}
