//! Directional bias component

use super::super::utils::{panel_block, tone_color};
use crate::format::format_confidence;
use crate::panels::OrientationView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

pub fn render_orientation(f: &mut Frame, area: Rect, title: &str, view: &OrientationView) {
    let mut headline = vec![Span::styled(
        view.label,
        Style::default()
            .fg(tone_color(view.tone))
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(confidence) = view.confidence {
        headline.push(Span::styled(
            format!("  (confiance {})", format_confidence(confidence)),
            Style::default().fg(Color::Gray),
        ));
    }

    let mut lines = vec![Line::from(headline)];
    if let Some(comment) = &view.comment {
        lines.push(Line::from(comment.clone()));
    }
    for note in &view.notes {
        lines.push(Line::from(Span::styled(
            format!("• {}", note),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block(title))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
