//! Dashboard main renderer

use super::components::{footer, header, logs, render_panel};
use super::state::DashboardState;
use crate::panels::PanelId;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(20),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    for (panel, area) in panel_areas(main_chunks[1], &state.panels) {
        render_panel(f, area, state, panel);
    }
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}

/// Splits `area` between the panels: a single panel fills it, otherwise the
/// panels are laid out in two rows of up to three.
fn panel_areas(area: Rect, panels: &[PanelId]) -> Vec<(PanelId, Rect)> {
    if panels.len() <= 1 {
        return panels.iter().map(|p| (*p, area)).collect();
    }

    let per_row = panels.len().div_ceil(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    panels
        .chunks(per_row)
        .zip(rows.iter())
        .flat_map(|(row_panels, row_area)| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Fill(1); row_panels.len()])
                .split(*row_area);
            row_panels
                .iter()
                .copied()
                .zip(columns.iter().copied())
                .collect::<Vec<_>>()
        })
        .collect()
}
