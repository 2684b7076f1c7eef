//! Dashboard state update logic
//!
//! Applies queued region writes and activity events to the dashboard state.

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, Source};

impl DashboardState {
    /// Advance one UI tick: apply every queued write, then every queued event.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.set_region(update);
        }

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if event.source != Source::Refresher {
            return;
        }
        match event.event_type {
            EventType::Refresh => self.set_cycles_in_flight(self.cycles_in_flight() + 1),
            EventType::Success => {
                self.set_cycles_in_flight(self.cycles_in_flight().saturating_sub(1))
            }
            EventType::Error => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::environment::Environment;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::panels::{HealthStatus, PanelBody, PanelId, PanelUpdate};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use std::time::{Duration, Instant};

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            PanelId::ALL.to_vec(),
            &UIConfig::new(false, Duration::from_secs(60), "TEST"),
        )
    }

    fn health(status: &str) -> PanelUpdate {
        PanelUpdate::new(
            PanelId::Health,
            PanelBody::Health(HealthStatus {
                status: status.to_string(),
            }),
        )
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = state();
        assert!(state.region(PanelId::Health).is_none());

        state.add_update(health("ok"));
        state.add_update(PanelUpdate::new(
            PanelId::Health,
            PanelBody::Unavailable("API injoignable."),
        ));
        state.add_update(health("degraded"));
        state.update();

        let region = state.region(PanelId::Health).unwrap();
        assert_eq!(
            region.body,
            PanelBody::Health(HealthStatus {
                status: "degraded".to_string()
            })
        );
        assert!(state.region(PanelId::Indices).is_none());
    }

    #[test]
    fn test_cycles_in_flight_tracks_refresher_events() {
        let mut state = state();
        state.add_event(Event::cycle_started("startup"));
        state.add_event(Event::cycle_started("manual"));
        state.update();
        assert_eq!(state.cycles_in_flight(), 2);

        state.add_event(Event::refresher_with_level(
            "done".to_string(),
            EventType::Success,
            LogLevel::Debug,
        ));
        // Panel events leave the counter alone
        state.add_event(Event::panel_with_level(
            PanelId::Calendar,
            "Calendar refreshed".to_string(),
            EventType::Success,
            LogLevel::Debug,
        ));
        state.update();
        assert_eq!(state.cycles_in_flight(), 1);
        assert_eq!(state.activity_logs.len(), 4);
    }
}
