//! Session setup and initialization

use crate::api::{MacroApi, MacroApiClient};
use crate::config::Settings;
use crate::events::Event;
use crate::panels::{PanelId, PanelUpdate};
use crate::workers::core::event_channels;
use crate::workers::{RefreshLoop, Refresher};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Which set of panels a session shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashboardKind {
    /// All six panels, refreshed every minute by default.
    Full,
    /// The regime panel alone, refreshed every 30 minutes by default.
    Regime,
}

impl DashboardKind {
    /// Header title of the view.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Full => "MACRO DASHBOARD",
            DashboardKind::Regime => "RÉGIME MACRO",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DashboardKind::Full => "dashboard",
            DashboardKind::Regime => "regime",
        }
    }
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Activity events from the panels and the refresh loop
    pub event_receiver: mpsc::Receiver<Event>,
    /// Region writes from the panels
    pub update_receiver: mpsc::Receiver<PanelUpdate>,
    /// Running refresh loop
    pub refresh_loop: RefreshLoop,
    /// Shutdown sender to stop the refresh loop
    pub shutdown_sender: broadcast::Sender<()>,
    /// Panels shown, in display order
    pub panels: Vec<PanelId>,
    pub kind: DashboardKind,
    pub settings: Settings,
}

/// Builds the panels of `kind` on top of `api`.
pub fn build_refresher(
    kind: DashboardKind,
    api: Arc<dyn MacroApi>,
    sender: crate::workers::core::EventSender,
    settings: &Settings,
) -> Refresher {
    match kind {
        DashboardKind::Full => Refresher::for_dashboard(api, sender, settings),
        DashboardKind::Regime => Refresher::for_regime(api, sender),
    }
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the API client
/// 2. Sets up the event and shutdown channels
/// 3. Starts the refresh loop, which performs the startup refresh right away
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be created
pub async fn setup_session(
    kind: DashboardKind,
    settings: Settings,
) -> Result<SessionData, Box<dyn Error>> {
    let api: Arc<dyn MacroApi> = Arc::new(MacroApiClient::new(settings.environment.clone())?);
    log::debug!("Reading macro API at {}", api.base_url());

    let (sender, event_receiver, update_receiver) = event_channels();
    let refresher = build_refresher(kind, api, sender, &settings);
    let panels = refresher.panel_ids();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);
    let refresh_loop = RefreshLoop::start(
        refresher,
        settings.refresh_interval,
        shutdown_sender.clone(),
    );

    Ok(SessionData {
        event_receiver,
        update_receiver,
        refresh_loop,
        shutdown_sender,
        panels,
        kind,
        settings,
    })
}
