//! News sentiment heat grid.
//!
//! The API serves a flat list of `(date, bucket, sentiment)` triples in no
//! particular order. [`build_grid`] pivots them into one row per date with a
//! cell for each of the five categories, so the rendered grid only depends on
//! the set of triples and never on their order.

use super::{Panel, PanelBody, PanelContext, PanelId};
use crate::api::types::SentimentEntry;
use crate::consts::dashboard_consts::PLACEHOLDER;
use crate::format::{Tone, classify_sign, format_short_date};
use std::collections::BTreeMap;

/// Categories of the grid, in column order: `(bucket, header)`.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("macro_us", "Macro US"),
    ("macro_europe", "Macro Europe"),
    ("companies", "Entreprises"),
    ("geopolitics", "Géopolitique"),
    ("tech", "Tech"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentCell {
    pub value: Option<f64>,
    pub text: String,
    pub tone: Tone,
}

impl SentimentCell {
    fn new(value: Option<f64>, epsilon: f64) -> Self {
        match value {
            Some(v) => Self {
                value: Some(v),
                text: format!("{:+.2}", v),
                tone: classify_sign(v, epsilon),
            },
            None => Self {
                value: None,
                text: PLACEHOLDER.to_string(),
                tone: Tone::Neutral,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRow {
    pub date: String,
    /// `DD/MM`, or the raw date when it does not parse.
    pub label: String,
    /// One cell per entry of [`CATEGORIES`], same order.
    pub cells: Vec<SentimentCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentGrid {
    /// Ascending by date.
    pub rows: Vec<SentimentRow>,
}

impl SentimentGrid {
    pub fn headers() -> impl Iterator<Item = &'static str> {
        CATEGORIES.iter().map(|(_, header)| *header)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn category_index(bucket: &str) -> Option<usize> {
    CATEGORIES.iter().position(|(key, _)| *key == bucket)
}

/// Mean of the non-null values, summed in sorted order.
fn mean(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pivots sentiment triples into a date x category grid.
///
/// Unknown buckets are ignored. Duplicate `(date, bucket)` pairs are
/// averaged over their non-null values. Missing pairs and null polarities
/// render the placeholder.
pub fn build_grid(entries: Vec<SentimentEntry>, epsilon: f64) -> SentimentGrid {
    let mut pivot: BTreeMap<String, [Vec<f64>; 5]> = BTreeMap::new();

    for entry in entries {
        let Some(index) = category_index(entry.bucket.trim()) else {
            log::debug!("Ignoring unknown sentiment bucket '{}'", entry.bucket);
            continue;
        };
        let values = pivot.entry(entry.date).or_default();
        if let Some(sentiment) = entry.sentiment.filter(|s| s.is_finite()) {
            values[index].push(sentiment);
        }
    }

    let rows = pivot
        .into_iter()
        .map(|(date, mut columns)| SentimentRow {
            label: format_short_date(&date),
            cells: columns
                .iter_mut()
                .map(|values| SentimentCell::new(mean(values), epsilon))
                .collect(),
            date,
        })
        .collect();

    SentimentGrid { rows }
}

pub struct SentimentGridPanel {
    ctx: PanelContext,
    epsilon: f64,
}

impl SentimentGridPanel {
    pub fn new(ctx: PanelContext, epsilon: f64) -> Self {
        Self { ctx, epsilon }
    }
}

#[async_trait::async_trait]
impl Panel for SentimentGridPanel {
    fn id(&self) -> PanelId {
        PanelId::SentimentGrid
    }

    async fn refresh(&self) {
        let result = self
            .ctx
            .api()
            .sentiment_grid()
            .await
            .map(|r| PanelBody::SentimentGrid(build_grid(r.grid, self.epsilon)));
        self.ctx.publish(self.id(), result).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(date: &str, bucket: &str, sentiment: Option<f64>) -> SentimentEntry {
        SentimentEntry {
            date: date.to_string(),
            bucket: bucket.to_string(),
            sentiment,
        }
    }

    fn sample() -> Vec<SentimentEntry> {
        vec![
            triple("2026-10-19", "tech", Some(0.4)),
            triple("2026-10-17", "macro_us", Some(-0.3)),
            triple("2026-10-19", "macro_us", Some(0.02)),
            triple("2026-10-18", "geopolitics", None),
            triple("2026-10-19", "tech", Some(0.1)),
            triple("2026-10-17", "companies", Some(0.7)),
            triple("2026-10-18", "weather", Some(0.9)),
            triple("2026-10-19", "tech", Some(0.3)),
        ]
    }

    #[test]
    fn test_grid_has_dates_times_five_cells() {
        let grid = build_grid(sample(), 0.05);

        let dates: Vec<_> = grid.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-10-17", "2026-10-18", "2026-10-19"]);
        assert!(grid.rows.iter().all(|r| r.cells.len() == 5));
        let cells: usize = grid.rows.iter().map(|r| r.cells.len()).sum();
        assert_eq!(cells, 3 * 5);
    }

    #[test]
    fn test_missing_pairs_render_placeholder() {
        let grid = build_grid(sample(), 0.05);

        // 2026-10-18 only has a null geopolitics value and an unknown bucket
        let row = &grid.rows[1];
        assert!(row.cells.iter().all(|c| c.text == "—" && c.value.is_none()));
        assert!(row.cells.iter().all(|c| c.tone == Tone::Neutral));

        let row = &grid.rows[0];
        assert_eq!(row.label, "17/10");
        assert_eq!(row.cells[0].text, "-0.30");
        assert_eq!(row.cells[0].tone, Tone::Negative);
        assert_eq!(row.cells[1].text, "—");
        assert_eq!(row.cells[2].tone, Tone::Positive);
    }

    #[test]
    fn test_duplicates_are_averaged() {
        let grid = build_grid(sample(), 0.05);
        let tech = &grid.rows[2].cells[4];
        assert!((tech.value.unwrap() - 0.8 / 3.0).abs() < 1e-12);
        assert_eq!(tech.text, "+0.27");
    }

    #[test]
    fn test_epsilon_band() {
        let grid = build_grid(sample(), 0.05);
        assert_eq!(grid.rows[2].cells[0].tone, Tone::Neutral);

        let grid = build_grid(sample(), 0.0);
        assert_eq!(grid.rows[2].cells[0].tone, Tone::Positive);
    }

    #[test]
    fn test_pivot_is_invariant_under_permutation() {
        let expected = build_grid(sample(), 0.05);

        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(build_grid(reversed, 0.05), expected);

        let entries = sample();
        for shift in 1..entries.len() {
            let mut rotated = entries.clone();
            rotated.rotate_left(shift);
            assert_eq!(build_grid(rotated, 0.05), expected);
        }
    }

    #[test]
    fn test_empty_grid() {
        let grid = build_grid(Vec::new(), 0.05);
        assert!(grid.is_empty());
        assert!(grid.rows.is_empty());
        assert_eq!(SentimentGrid::headers().count(), 5);
    }
}
