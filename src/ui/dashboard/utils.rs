//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::format::Tone;
use crate::panels::PanelId;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Refresher => Color::Cyan,
        Source::Panel(PanelId::Health) => Color::LightGreen,
        Source::Panel(_) => Color::Gray,
    }
}

/// Terminal colour of a tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
        Tone::Neutral => Color::Gray,
    }
}

/// Bordered block shared by every panel region.
pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        // DD/MM from the date, HH:MM:SS from the time
        if let (Some(month), Some(day)) = (date_part.get(5..7), date_part.get(8..10)) {
            return format!("{}/{} {}", day, month, time_part);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Drop HTML error pages, keep the status
    if msg.contains("<html>") || msg.contains("<!DOCTYPE") {
        if let Some((head, _)) = msg.split_once(": <") {
            return head.to_string();
        }
    }
    // Verbose reqwest errors
    if let Some((head, _)) = msg.split_once("Reqwest error") {
        return format!("{}erreur réseau", head);
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}
