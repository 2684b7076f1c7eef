//! API liveness component

use super::super::utils::panel_block;
use crate::panels::HealthStatus;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub fn render_health(f: &mut Frame, area: Rect, title: &str, status: &HealthStatus) {
    let color = if status.is_healthy() {
        Color::Green
    } else {
        Color::Yellow
    };
    let paragraph = Paragraph::new(status.label())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(panel_block(title));
    f.render_widget(paragraph, area);
}
