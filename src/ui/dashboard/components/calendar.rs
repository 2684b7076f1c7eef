//! Economic calendar component

use super::super::utils::panel_block;
use crate::consts::dashboard_consts::PLACEHOLDER;
use crate::panels::CalendarEvent;
use crate::panels::calendar::Impact;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

fn impact_color(impact: Impact) -> Color {
    match impact {
        Impact::Low => Color::Gray,
        Impact::Medium => Color::Yellow,
        Impact::High => Color::Red,
    }
}

pub fn render_calendar(f: &mut Frame, area: Rect, title: &str, events: &[CalendarEvent]) {
    if events.is_empty() {
        super::render_message(f, area, title, "Aucun évènement à venir.", Color::DarkGray);
        return;
    }

    let rows = events.iter().map(|event| {
        let style = if event.is_today {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(event.short_date.clone()),
            Cell::from(event.time.clone().unwrap_or_else(|| PLACEHOLDER.to_string())),
            Cell::from(event.region.clone()),
            Cell::from(event.title.clone()),
            Cell::from(event.impact.label())
                .style(Style::default().fg(impact_color(event.impact))),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(6),
        ],
    )
    .block(panel_block(title));
    f.render_widget(table, area);
}
