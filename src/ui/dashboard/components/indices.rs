//! Market indices table component

use super::super::utils::{panel_block, tone_color};
use crate::panels::IndexRow;
use crate::panels::indices::Change;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

pub fn render_indices(f: &mut Frame, area: Rect, title: &str, rows: &[IndexRow]) {
    let header = Row::new(["Indice", "Jour", "Semaine", "Mois"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.name.clone()),
            change_cell(&row.daily),
            change_cell(&row.weekly),
            change_cell(&row.monthly),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(panel_block(title));
    f.render_widget(table, area);
}

fn change_cell(change: &Change) -> Cell<'static> {
    Cell::from(change.text.clone()).style(Style::default().fg(tone_color(change.tone)))
}
