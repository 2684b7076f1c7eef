//! Plain-text rendering of panel regions, for headless mode and `once`.

use crate::consts::dashboard_consts::PLACEHOLDER;
use crate::format::{format_confidence, format_local_datetime};
use crate::panels::{PanelBody, PanelUpdate, SentimentGrid};
use std::fmt::Write;

/// Renders a region write as a titled block of text.
pub fn render_update(update: &PanelUpdate) -> String {
    let mut out = format!("== {} ({}) ==\n", update.panel.title(), update.produced_at);
    render_body(&mut out, &update.body);
    out
}

fn render_body(out: &mut String, body: &PanelBody) {
    match body {
        PanelBody::Snapshot(view) => {
            let _ = writeln!(out, "Régime: {}", view.label);
            if let Some(confidence) = view.confidence {
                let _ = writeln!(out, "Confiance: {}", format_confidence(confidence));
            }
            if let Some(stability) = &view.stability {
                let _ = writeln!(out, "Stabilité: {}", stability);
            }
            if let Some(volatility) = &view.volatility {
                let _ = writeln!(out, "Volatilité: {}", volatility);
            }
            for bias in &view.biases {
                let _ = writeln!(out, "  {:<20}{}", bias.asset_class, bias.label);
            }
            if let Some(commentary) = &view.commentary {
                let _ = writeln!(out, "{}", commentary);
            }
            if let Some(timestamp) = &view.timestamp {
                let _ = writeln!(out, "Mis à jour {}", format_local_datetime(timestamp));
            }
        }
        PanelBody::Orientation(view) => {
            match view.confidence {
                Some(c) => {
                    let _ = writeln!(out, "{} (confiance {})", view.label, format_confidence(c));
                }
                None => {
                    let _ = writeln!(out, "{}", view.label);
                }
            }
            if let Some(comment) = &view.comment {
                let _ = writeln!(out, "{}", comment);
            }
            for note in &view.notes {
                let _ = writeln!(out, "  • {}", note);
            }
        }
        PanelBody::Indices(rows) => {
            let _ = writeln!(out, "{:<24}{:>9}{:>9}{:>9}", "Indice", "Jour", "Semaine", "Mois");
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:<24}{:>9}{:>9}{:>9}",
                    row.name, row.daily.text, row.weekly.text, row.monthly.text
                );
            }
        }
        PanelBody::Calendar(events) => {
            if events.is_empty() {
                let _ = writeln!(out, "Aucun évènement à venir.");
            }
            for event in events {
                let _ = writeln!(
                    out,
                    "{}{} {:<5} {:<4} {} [{}]",
                    if event.is_today { "*" } else { " " },
                    event.short_date,
                    event.time.as_deref().unwrap_or(PLACEHOLDER),
                    event.region,
                    event.title,
                    event.impact.label()
                );
            }
        }
        PanelBody::SentimentGrid(grid) => {
            if grid.is_empty() {
                let _ = writeln!(out, "Aucune donnée de sentiment.");
                return;
            }
            let _ = write!(out, "{:<6}", "Date");
            for header in SentimentGrid::headers() {
                let _ = write!(out, "{:>14}", header);
            }
            out.push('\n');
            for row in &grid.rows {
                let _ = write!(out, "{:<6}", row.label);
                for cell in &row.cells {
                    let _ = write!(out, "{:>14}", cell.text);
                }
                out.push('\n');
            }
        }
        PanelBody::Health(status) => {
            let _ = writeln!(out, "{}", status.label());
        }
        PanelBody::Unavailable(message) => {
            let _ = writeln!(out, "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{IndexQuote, SentimentEntry};
    use crate::panels::{PanelId, indices, sentiment};

    fn update(panel: PanelId, body: PanelBody) -> PanelUpdate {
        PanelUpdate {
            panel,
            body,
            produced_at: "09:00:00".to_string(),
        }
    }

    #[test]
    fn test_render_unavailable() {
        let text = render_update(&update(
            PanelId::Calendar,
            PanelBody::Unavailable("Calendrier indisponible."),
        ));
        assert_eq!(text, "== CALENDRIER ÉCO (09:00:00) ==\nCalendrier indisponible.\n");
    }

    #[test]
    fn test_render_indices_placeholder() {
        let rows = indices::build_rows(vec![IndexQuote {
            symbol: "SPX".to_string(),
            name: Some("S&P 500".to_string()),
            daily: Some(2.34),
            weekly: None,
            monthly: Some(-0.04),
        }]);
        let text = render_update(&update(PanelId::Indices, PanelBody::Indices(rows)));
        assert!(text.contains("S&P 500"));
        assert!(text.contains("+2.3%"));
        assert!(text.contains("—"));
        assert!(text.contains("-0.0%"));
    }

    #[test]
    fn test_render_sentiment_grid() {
        let grid = sentiment::build_grid(
            vec![SentimentEntry {
                date: "2026-10-19".to_string(),
                bucket: "tech".to_string(),
                sentiment: Some(0.5),
            }],
            0.05,
        );
        let text = render_update(&update(PanelId::SentimentGrid, PanelBody::SentimentGrid(grid)));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Géopolitique"));
        assert!(lines[2].starts_with("19/10"));
        assert!(lines[2].ends_with("+0.50"));
        assert_eq!(lines[2].matches('—').count(), 4);
    }
}
