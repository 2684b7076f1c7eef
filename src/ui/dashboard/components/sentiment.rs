//! News sentiment heat grid component

use super::super::utils::{panel_block, tone_color};
use crate::panels::SentimentGrid;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

pub fn render_sentiment(f: &mut Frame, area: Rect, title: &str, grid: &SentimentGrid) {
    if grid.is_empty() {
        super::render_message(f, area, title, "Aucune donnée de sentiment.", Color::DarkGray);
        return;
    }

    let header = Row::new(std::iter::once("Date").chain(SentimentGrid::headers())).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = grid.rows.iter().map(|row| {
        let cells = row.cells.iter().map(|cell| {
            Cell::from(cell.text.clone()).style(Style::default().fg(tone_color(cell.tone)))
        });
        Row::new(std::iter::once(Cell::from(row.label.clone())).chain(cells))
    });

    let mut widths = vec![Constraint::Length(6)];
    widths.extend(SentimentGrid::headers().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(title));
    f.render_widget(table, area);
}
