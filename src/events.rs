//! Event System
//!
//! Activity events emitted by panels and the refresh loop, shown in the
//! activity log (TUI) or printed to stdout (headless).

use crate::logging::{LogLevel, should_log_with_env};
use crate::panels::PanelId;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// A single panel's refresh.
    Panel(PanelId),
    /// The refresh loop driving all panels.
    Refresher,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn panel_with_level(
        panel: PanelId,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::Panel(panel), msg, event_type, log_level)
    }

    pub fn refresher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Refresher, msg, event_type, log_level)
    }

    /// Marks the start of a refresh cycle.
    pub fn cycle_started(trigger: &str) -> Self {
        Self::refresher_with_level(
            format!("Refreshing all panels ({})", trigger),
            EventType::Refresh,
            LogLevel::Info,
        )
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
