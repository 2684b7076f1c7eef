//! Global risk regime component

use super::super::utils::{panel_block, tone_color};
use crate::format::{format_confidence, format_local_datetime};
use crate::panels::RegimeSnapshot;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

pub fn render_regime(f: &mut Frame, area: Rect, title: &str, view: &RegimeSnapshot) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Régime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            view.label.clone(),
            Style::default()
                .fg(tone_color(view.tone))
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(confidence) = view.confidence {
        lines.push(detail("Confiance", format_confidence(confidence)));
    }
    if let Some(stability) = &view.stability {
        lines.push(detail("Stabilité", stability.clone()));
    }
    if let Some(volatility) = &view.volatility {
        lines.push(detail("Volatilité", volatility.clone()));
    }

    for bias in &view.biases {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", bias.asset_class),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(bias.label, Style::default().fg(tone_color(bias.tone))),
        ]));
    }

    if let Some(commentary) = &view.commentary {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            commentary.clone(),
            Style::default().fg(Color::White),
        )));
    }
    if let Some(timestamp) = &view.timestamp {
        lines.push(Line::from(Span::styled(
            format!("Mis à jour {}", format_local_datetime(timestamp)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block(title))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
