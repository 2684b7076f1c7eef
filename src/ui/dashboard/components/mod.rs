//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod calendar;
pub mod footer;
pub mod header;
pub mod health;
pub mod indices;
pub mod logs;
pub mod orientation;
pub mod regime;
pub mod sentiment;

use super::state::DashboardState;
use super::utils::panel_block;
use crate::panels::{PanelBody, PanelId};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

/// Render one panel region from its last write.
pub fn render_panel(f: &mut Frame, area: Rect, state: &DashboardState, panel: PanelId) {
    let Some(update) = state.region(panel) else {
        render_message(f, area, panel.title(), "Chargement...", Color::DarkGray);
        return;
    };
    let title = format!("{} ({})", panel.title(), update.produced_at);

    match &update.body {
        PanelBody::Snapshot(view) => regime::render_regime(f, area, &title, view),
        PanelBody::Orientation(view) => orientation::render_orientation(f, area, &title, view),
        PanelBody::Indices(rows) => indices::render_indices(f, area, &title, rows),
        PanelBody::Calendar(events) => calendar::render_calendar(f, area, &title, events),
        PanelBody::SentimentGrid(grid) => sentiment::render_sentiment(f, area, &title, grid),
        PanelBody::Health(status) => health::render_health(f, area, &title, status),
        PanelBody::Unavailable(message) => render_message(f, area, &title, message, Color::Red),
    }
}

/// A region holding a single line of text.
pub fn render_message(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let paragraph = Paragraph::new(Line::from(message.to_string()))
        .style(Style::default().fg(color).add_modifier(Modifier::ITALIC))
        .block(panel_block(title))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
