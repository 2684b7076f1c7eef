//! Market indices table panel.

use super::{Panel, PanelBody, PanelContext, PanelId};
use crate::api::types::IndexQuote;
use crate::format::{Tone, classify_optional, format_percent};

/// One formatted percentage change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub text: String,
    pub tone: Tone,
}

impl Change {
    fn new(value: Option<f64>) -> Self {
        Self {
            text: format_percent(value),
            tone: classify_optional(value, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub symbol: String,
    /// Display name, the symbol when the API has none.
    pub name: String,
    pub daily: Change,
    pub weekly: Change,
    pub monthly: Change,
}

pub fn build_rows(quotes: Vec<IndexQuote>) -> Vec<IndexRow> {
    quotes
        .into_iter()
        .map(|q| IndexRow {
            name: q
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| q.symbol.clone()),
            symbol: q.symbol,
            daily: Change::new(q.daily),
            weekly: Change::new(q.weekly),
            monthly: Change::new(q.monthly),
        })
        .collect()
}

pub struct IndicesPanel {
    ctx: PanelContext,
}

impl IndicesPanel {
    pub fn new(ctx: PanelContext) -> Self {
        Self { ctx }
    }
}

#[async_trait::async_trait]
impl Panel for IndicesPanel {
    fn id(&self) -> PanelId {
        PanelId::Indices
    }

    async fn refresh(&self) {
        let result = self
            .ctx
            .api()
            .indices()
            .await
            .map(|quotes| PanelBody::Indices(build_rows(quotes)));
        self.ctx.publish(self.id(), result).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMacroApi;
    use crate::panels::test_support::{context_with, drain_updates};

    #[test]
    fn test_missing_values_render_placeholder_not_zero() {
        let rows = build_rows(vec![IndexQuote {
            symbol: "SPX".to_string(),
            name: None,
            daily: Some(1.26),
            weekly: None,
            monthly: Some(-3.0),
        }]);

        let row = &rows[0];
        assert_eq!(row.name, "SPX");
        assert_eq!(row.daily.text, "+1.3%");
        assert_eq!(row.daily.tone, Tone::Positive);
        assert_eq!(row.weekly.text, "—");
        assert_eq!(row.weekly.tone, Tone::Neutral);
        assert_eq!(row.monthly.text, "-3.0%");
        assert_eq!(row.monthly.tone, Tone::Negative);
    }

    #[tokio::test]
    async fn test_refresh_publishes_rows() {
        let mut api = MockMacroApi::new();
        api.expect_indices().returning(|| {
            Ok(vec![IndexQuote {
                symbol: "NDX".to_string(),
                name: Some("Nasdaq 100".to_string()),
                daily: Some(0.0),
                weekly: None,
                monthly: None,
            }])
        });

        let (ctx, _events, mut updates) = context_with(api);
        IndicesPanel::new(ctx).refresh().await;

        match &drain_updates(&mut updates)[0].body {
            PanelBody::Indices(rows) => {
                assert_eq!(rows[0].name, "Nasdaq 100");
                assert_eq!(rows[0].daily.text, "0.0%");
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
