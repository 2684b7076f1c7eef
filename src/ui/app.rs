//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::panels::{PanelId, PanelUpdate};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::RefreshHandle;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
    pub title: &'static str,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration, title: &'static str) -> Self {
        Self {
            with_background_color,
            refresh_interval,
            title,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the panels.
    Dashboard,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    Refresh,
    SkipSplash,
    None,
}

fn key_action(screen: Screen, code: KeyCode) -> KeyAction {
    match (screen, code) {
        (_, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) => KeyAction::Quit,
        (Screen::Dashboard, KeyCode::Char('r') | KeyCode::Char('R')) => KeyAction::Refresh,
        (Screen::Splash, _) => KeyAction::SkipSplash,
        (Screen::Dashboard, _) => KeyAction::None,
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Region contents and activity log. Fed during the splash screen too,
    /// so no write is lost.
    dashboard: DashboardState,

    /// Receives activity events from the panels and the refresh loop.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives region writes from the panels.
    update_receiver: mpsc::Receiver<PanelUpdate>,

    /// Broadcasts shutdown signal to the refresh loop.
    shutdown_sender: broadcast::Sender<()>,

    /// Requests manual refreshes.
    refresh: RefreshHandle,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        panels: Vec<PanelId>,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        update_receiver: mpsc::Receiver<PanelUpdate>,
        shutdown_sender: broadcast::Sender<()>,
        refresh: RefreshHandle,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, Instant::now(), panels, &ui_config),
            event_receiver,
            update_receiver,
            shutdown_sender,
            refresh,
        }
    }

    /// Moves everything queued on the channels into the dashboard state.
    fn drain_channels(&mut self) {
        while let Ok(update) = self.update_receiver.try_recv() {
            self.dashboard.add_update(update);
        }
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
    }

    fn request_refresh(&mut self) {
        if !self.refresh.trigger() {
            log::debug!("Manual refresh dropped, too many pending requests");
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);
    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    // UI event loop
    loop {
        // Exit when someone else stopped the session
        if shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        app.drain_channels();
        app.dashboard.update();
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events without blocking the runtime for long
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key_action(app.current_screen, key.code) {
                    KeyAction::Quit => {
                        // Send shutdown signal to the refresh loop
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    KeyAction::Refresh => app.request_refresh(),
                    KeyAction::SkipSplash => app.current_screen = Screen::Dashboard,
                    KeyAction::None => {}
                }
            }
        }
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
