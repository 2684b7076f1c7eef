//! Dashboard state management
//!
//! Contains the main dashboard state struct: one region per panel plus the
//! activity log.

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::panels::{PanelId, PanelUpdate};
use crate::ui::app::UIConfig;

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Dashboard state: the current content of every panel region.
#[derive(Debug)]
pub struct DashboardState {
    /// Title shown in the header.
    pub title: &'static str,
    /// The environment the panels read from.
    pub environment: Environment,
    /// The start time of the refresh loop; scheduled refreshes happen every
    /// `refresh_interval` from here.
    pub start_time: Instant,
    /// Interval between scheduled refreshes.
    pub refresh_interval: Duration,
    /// Regions shown, in display order.
    pub panels: Vec<PanelId>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Queue of region writes waiting to be applied
    pub pending_updates: VecDeque<PanelUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Last write of each region. Absent until the first refresh lands.
    regions: HashMap<PanelId, PanelUpdate>,
    /// Refresh cycles started but not yet complete.
    cycles_in_flight: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        environment: Environment,
        start_time: Instant,
        panels: Vec<PanelId>,
        ui_config: &UIConfig,
    ) -> Self {
        Self {
            title: ui_config.title,
            environment,
            start_time,
            refresh_interval: ui_config.refresh_interval,
            panels,
            pending_events: VecDeque::new(),
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            regions: HashMap::new(),
            cycles_in_flight: 0,
        }
    }

    /// Current content of `panel`'s region, if it has been written.
    pub fn region(&self, panel: PanelId) -> Option<&PanelUpdate> {
        self.regions.get(&panel)
    }

    /// Replaces `update.panel`'s region. The last write wins.
    pub fn set_region(&mut self, update: PanelUpdate) {
        self.regions.insert(update.panel, update);
    }

    pub fn cycles_in_flight(&self) -> usize {
        self.cycles_in_flight
    }

    pub fn set_cycles_in_flight(&mut self, count: usize) {
        self.cycles_in_flight = count;
    }

    /// Time left until the next scheduled refresh, and the elapsed fraction
    /// of the current interval.
    pub fn countdown(&self) -> (Duration, f64) {
        countdown_at(self.start_time.elapsed(), self.refresh_interval)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add a region write to the processing queue
    pub fn add_update(&mut self, update: PanelUpdate) {
        self.pending_updates.push_back(update);
    }
}

fn countdown_at(elapsed: Duration, interval: Duration) -> (Duration, f64) {
    if interval.is_zero() {
        return (Duration::ZERO, 1.0);
    }
    let into_cycle = Duration::from_nanos((elapsed.as_nanos() % interval.as_nanos()) as u64);
    let ratio = into_cycle.as_secs_f64() / interval.as_secs_f64();
    (interval - into_cycle, ratio)
}
