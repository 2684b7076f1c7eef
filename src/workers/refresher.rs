//! Refresh orchestration
//!
//! [`Refresher`] fans a refresh out to every panel at once. [`RefreshLoop`]
//! drives it: once at startup, then on a fixed interval and whenever a manual
//! refresh is requested. Every cycle runs as its own task, so a slow or hung
//! endpoint never holds back the next cycle or the other panels.

use crate::api::MacroApi;
use crate::config::Settings;
use crate::consts::dashboard_consts::TRIGGER_QUEUE_SIZE;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::panels::{
    CalendarPanel, HealthPanel, IndicesPanel, OrientationPanel, Panel, PanelContext, PanelId,
    SentimentGridPanel, SnapshotPanel, SnapshotSource,
};
use crate::workers::core::EventSender;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

/// What started a refresh cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RefreshTrigger {
    Startup,
    Timer,
    Manual,
}

/// Refreshes a fixed set of panels concurrently.
#[derive(Clone)]
pub struct Refresher {
    panels: Arc<Vec<Box<dyn Panel>>>,
    sender: EventSender,
}

impl Refresher {
    pub fn new(panels: Vec<Box<dyn Panel>>, sender: EventSender) -> Self {
        Self {
            panels: Arc::new(panels),
            sender,
        }
    }

    /// All six panels of the full dashboard.
    pub fn for_dashboard(api: Arc<dyn MacroApi>, sender: EventSender, settings: &Settings) -> Self {
        let ctx = PanelContext::new(api, sender.clone());
        let panels: Vec<Box<dyn Panel>> = vec![
            Box::new(SnapshotPanel::new(ctx.clone(), SnapshotSource::Snapshot)),
            Box::new(OrientationPanel::new(ctx.clone())),
            Box::new(IndicesPanel::new(ctx.clone())),
            Box::new(CalendarPanel::new(
                ctx.clone(),
                settings.calendar_days_ahead,
                settings.calendar_impact_filter,
            )),
            Box::new(SentimentGridPanel::new(
                ctx.clone(),
                settings.sentiment_epsilon,
            )),
            Box::new(HealthPanel::new(ctx)),
        ];
        Self::new(panels, sender)
    }

    /// The single regime panel fed by `/api/macro/state`.
    pub fn for_regime(api: Arc<dyn MacroApi>, sender: EventSender) -> Self {
        let ctx = PanelContext::new(api, sender.clone());
        let panels: Vec<Box<dyn Panel>> =
            vec![Box::new(SnapshotPanel::new(ctx, SnapshotSource::State))];
        Self::new(panels, sender)
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id()).collect()
    }

    /// Refreshes every panel concurrently and returns once all of them have
    /// published. Each panel publishes as soon as its own fetch completes.
    pub async fn refresh_all(&self, trigger: RefreshTrigger) {
        log::debug!("Refresh cycle started ({})", trigger);
        self.sender
            .send_event(Event::cycle_started(&trigger.to_string()))
            .await;

        join_all(self.panels.iter().map(|panel| panel.refresh())).await;

        log::debug!("Refresh cycle finished ({})", trigger);
        self.sender
            .send_refresh_event(
                format!("Refresh cycle complete ({})", trigger),
                EventType::Success,
                LogLevel::Debug,
            )
            .await;
    }
}

/// Requests manual refreshes of a running [`RefreshLoop`].
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    triggers: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Requests an extra cycle. Returns `false` when the loop is gone or
    /// already has too many pending requests.
    pub fn trigger(&self) -> bool {
        self.triggers.try_send(()).is_ok()
    }
}

/// Periodic refresh task with manual trigger and explicit shutdown.
#[derive(Debug)]
pub struct RefreshLoop {
    handle: RefreshHandle,
    shutdown: broadcast::Sender<()>,
    task: JoinHandle<()>,
}

impl RefreshLoop {
    /// Spawns the loop. The startup refresh runs immediately.
    ///
    /// The loop ends when `shutdown` fires.
    pub fn start(refresher: Refresher, interval: Duration, shutdown: broadcast::Sender<()>) -> Self {
        let (trigger_sender, trigger_receiver) = mpsc::channel(TRIGGER_QUEUE_SIZE);
        let task = tokio::spawn(refresh_loop(
            refresher,
            interval,
            trigger_receiver,
            shutdown.subscribe(),
        ));
        Self {
            handle: RefreshHandle {
                triggers: trigger_sender,
            },
            shutdown,
            task,
        }
    }

    pub fn handle(&self) -> RefreshHandle {
        self.handle.clone()
    }

    /// Stops the timer, aborts in-flight cycles and waits for the loop to exit.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }

    /// Waits for the loop to exit after an external shutdown.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

async fn refresh_loop(
    refresher: Refresher,
    interval: Duration,
    mut triggers: mpsc::Receiver<()>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut cycles = JoinSet::new();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately
    let mut next_trigger = RefreshTrigger::Startup;

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = ticker.tick() => {
                let r = refresher.clone();
                let trigger = next_trigger;
                next_trigger = RefreshTrigger::Timer;
                cycles.spawn(async move { r.refresh_all(trigger).await });
            }
            Some(()) = triggers.recv() => {
                let r = refresher.clone();
                cycles.spawn(async move { r.refresh_all(RefreshTrigger::Manual).await });
            }
            Some(result) = cycles.join_next(), if !cycles.is_empty() => {
                if let Err(e) = result {
                    if e.is_panic() {
                        log::error!("Refresh cycle panicked: {}", e);
                    }
                }
            }
        }
    }

    log::debug!("Refresh loop stopped, aborting {} in-flight cycle(s)", cycles.len());
    cycles.shutdown().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMacroApi;
    use crate::api::error::ApiError;
    use crate::api::types::{HealthResponse, SentimentGridResponse};
    use crate::environment::Environment;
    use crate::panels::{PanelBody, PanelUpdate};
    use crate::workers::core::event_channels;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use tokio::time::timeout;

    const WAIT: Duration = Duration::from_secs(5);

    fn settings() -> Settings {
        Settings {
            environment: Environment::Local,
            refresh_interval: Duration::from_secs(60),
            calendar_days_ahead: 2,
            calendar_impact_filter: None,
            sentiment_epsilon: 0.05,
        }
    }

    fn healthy_api() -> MockMacroApi {
        let mut api = MockMacroApi::new();
        api.expect_health().returning(|| {
            Ok(HealthResponse {
                status: "ok".to_string(),
            })
        });
        api
    }

    /// A panel whose endpoint never answers.
    struct HungPanel;

    #[async_trait::async_trait]
    impl Panel for HungPanel {
        fn id(&self) -> PanelId {
            PanelId::Indices
        }

        async fn refresh(&self) {
            std::future::pending::<()>().await;
        }
    }

    async fn next_update(updates: &mut mpsc::Receiver<PanelUpdate>) -> PanelUpdate {
        timeout(WAIT, updates.recv())
            .await
            .expect("timed out waiting for a panel update")
            .expect("update channel closed")
    }

    #[tokio::test]
    async fn test_failing_indices_do_not_block_other_panels() {
        let mut api = healthy_api();
        api.expect_macro_snapshot()
            .returning(|| Ok(Default::default()));
        api.expect_orientation().returning(|| Ok(Default::default()));
        api.expect_indices().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "internal error".to_string(),
            })
        });
        api.expect_calendar().returning(|_, _| Ok(Vec::new()));
        api.expect_sentiment_grid()
            .returning(|| Ok(SentimentGridResponse::default()));

        let (sender, _events, mut updates) = event_channels();
        let refresher = Refresher::for_dashboard(Arc::new(api), sender, &settings());
        assert_eq!(refresher.panel_ids(), PanelId::ALL.to_vec());

        refresher.refresh_all(RefreshTrigger::Manual).await;

        let mut bodies = HashMap::new();
        while let Ok(update) = updates.try_recv() {
            bodies.insert(update.panel, update.body);
        }
        assert_eq!(bodies.len(), 6);
        assert_eq!(
            bodies[&PanelId::Indices],
            PanelBody::Unavailable("Indices indisponibles.")
        );
        assert_eq!(bodies[&PanelId::Calendar], PanelBody::Calendar(Vec::new()));
        assert!(matches!(
            bodies[&PanelId::SentimentGrid],
            PanelBody::SentimentGrid(_)
        ));
        assert!(matches!(bodies[&PanelId::Health], PanelBody::Health(_)));
    }

    #[tokio::test]
    async fn test_hung_panel_does_not_delay_others() {
        let (sender, _events, mut updates) = event_channels();
        let ctx = PanelContext::new(Arc::new(healthy_api()), sender.clone());
        let panels: Vec<Box<dyn Panel>> = vec![Box::new(HungPanel), Box::new(HealthPanel::new(ctx))];
        let refresher = Refresher::new(panels, sender);

        let cycle = tokio::spawn(async move {
            refresher.refresh_all(RefreshTrigger::Timer).await;
        });

        let update = next_update(&mut updates).await;
        assert_eq!(update.panel, PanelId::Health);
        assert!(!cycle.is_finished());
        cycle.abort();
    }

    #[tokio::test]
    async fn test_loop_refreshes_at_startup_and_stops() {
        let (sender, _events, mut updates) = event_channels();
        let refresher = Refresher::for_regime(Arc::new(snapshot_api()), sender);
        let (shutdown, _) = broadcast::channel(1);

        let refresh_loop = RefreshLoop::start(refresher, Duration::from_secs(3600), shutdown);
        let update = next_update(&mut updates).await;
        assert_eq!(update.panel, PanelId::Snapshot);

        timeout(WAIT, refresh_loop.stop())
            .await
            .expect("loop did not stop");
    }

    #[tokio::test]
    async fn test_stop_aborts_hung_cycles() {
        let (sender, _events, _updates) = event_channels();
        let panels: Vec<Box<dyn Panel>> = vec![Box::new(HungPanel)];
        let refresher = Refresher::new(panels, sender);
        let (shutdown, _) = broadcast::channel(1);

        let refresh_loop = RefreshLoop::start(refresher, Duration::from_secs(3600), shutdown);
        tokio::task::yield_now().await;

        timeout(WAIT, refresh_loop.stop())
            .await
            .expect("loop did not stop");
    }

    #[tokio::test]
    async fn test_manual_trigger_runs_extra_cycle() {
        let (sender, mut events, mut updates) = event_channels();
        let refresher = Refresher::for_regime(Arc::new(snapshot_api()), sender);
        let (shutdown, _) = broadcast::channel(1);

        let refresh_loop = RefreshLoop::start(refresher, Duration::from_secs(3600), shutdown);
        next_update(&mut updates).await;

        assert!(refresh_loop.handle().trigger());
        next_update(&mut updates).await;

        let mut triggers = Vec::new();
        while let Ok(event) = events.try_recv() {
            if event.event_type == EventType::Refresh && event.log_level == LogLevel::Info {
                triggers.push(event.msg);
            }
        }
        assert_eq!(
            triggers,
            vec![
                "Refreshing all panels (startup)".to_string(),
                "Refreshing all panels (manual)".to_string(),
            ]
        );

        refresh_loop.stop().await;
    }

    /// Holds its first refresh until released; later refreshes publish at once.
    struct FirstCallWaits {
        sender: EventSender,
        calls: AtomicUsize,
        started: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait::async_trait]
    impl Panel for FirstCallWaits {
        fn id(&self) -> PanelId {
            PanelId::Indices
        }

        async fn refresh(&self) {
            let body = if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.started.notify_one();
                self.release.notified().await;
                PanelBody::Unavailable("first")
            } else {
                PanelBody::Unavailable("second")
            };
            self.sender
                .send_update(PanelUpdate::new(PanelId::Indices, body))
                .await;
        }
    }

    fn overlapping_loop() -> (
        RefreshLoop,
        mpsc::Receiver<PanelUpdate>,
        Arc<Notify>,
        Arc<Notify>,
    ) {
        let (sender, _events, updates) = event_channels();
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let panels: Vec<Box<dyn Panel>> = vec![Box::new(FirstCallWaits {
            sender: sender.clone(),
            calls: AtomicUsize::new(0),
            started: started.clone(),
            release: release.clone(),
        })];
        let (shutdown, _) = broadcast::channel(1);
        let refresh_loop = RefreshLoop::start(
            Refresher::new(panels, sender),
            Duration::from_secs(3600),
            shutdown,
        );
        (refresh_loop, updates, started, release)
    }

    #[tokio::test]
    async fn test_manual_trigger_during_hung_cycle_still_publishes() {
        let (refresh_loop, mut updates, started, _release) = overlapping_loop();
        timeout(WAIT, started.notified())
            .await
            .expect("startup cycle never reached the panel");

        assert!(refresh_loop.handle().trigger());
        let update = next_update(&mut updates).await;
        assert_eq!(update.body, PanelBody::Unavailable("second"));

        timeout(WAIT, refresh_loop.stop())
            .await
            .expect("loop did not stop");
    }

    #[tokio::test]
    async fn test_late_cycle_overwrites_region() {
        let (refresh_loop, mut updates, started, release) = overlapping_loop();
        timeout(WAIT, started.notified())
            .await
            .expect("startup cycle never reached the panel");

        assert!(refresh_loop.handle().trigger());
        let mut region = HashMap::new();
        let update = next_update(&mut updates).await;
        region.insert(update.panel, update.body);

        // The superseded cycle is not cancelled and lands last
        release.notify_one();
        let update = next_update(&mut updates).await;
        region.insert(update.panel, update.body);

        assert_eq!(region[&PanelId::Indices], PanelBody::Unavailable("first"));
        refresh_loop.stop().await;
    }

    #[tokio::test]
    async fn test_external_shutdown_ends_loop() {
        let (sender, _events, _updates) = event_channels();
        let refresher = Refresher::for_regime(Arc::new(snapshot_api()), sender);
        let (shutdown, _) = broadcast::channel(1);

        let refresh_loop =
            RefreshLoop::start(refresher, Duration::from_secs(3600), shutdown.clone());
        let _ = shutdown.send(());

        timeout(WAIT, refresh_loop.join())
            .await
            .expect("loop did not stop");
    }

    fn snapshot_api() -> MockMacroApi {
        use crate::api::types::{MacroRegime, MacroStateResponse, MarketBias};

        let mut api = MockMacroApi::new();
        api.expect_macro_state().returning(|| {
            Ok(MacroStateResponse {
                macro_regime: MacroRegime {
                    label: "Risk-On".to_string(),
                    confidence: Some(0.7),
                    stability: None,
                },
                commentary: None,
                market_bias: MarketBias::default(),
            })
        });
        api
    }
}
