//! Wire types of the macro API.
//!
//! Optional fields tolerate both `null` and absent keys. Only the fields a
//! panel needs to render itself are required.

use serde::Deserialize;

/// `GET /api/macro/state`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MacroStateResponse {
    pub macro_regime: MacroRegime,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub market_bias: MarketBias,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MacroRegime {
    pub label: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub stability: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketBias {
    pub equities: Option<String>,
    pub indices_us: Option<String>,
    pub commodities: Option<String>,
    pub crypto: Option<String>,
}

/// `GET /api/macro/snapshot`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MacroSnapshotResponse {
    pub bias: SnapshotBias,
    pub risk_mode: Option<String>,
    pub comment: Option<String>,
    pub volatility: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnapshotBias {
    pub equities: Option<String>,
    pub rates: Option<String>,
    pub usd: Option<String>,
    pub credit: Option<String>,
    pub commodities: Option<String>,
    pub crypto: Option<String>,
}

/// `GET /api/macro/orientation`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrientationResponse {
    pub risk: Option<String>,
    pub confidence: Option<f64>,
    pub comment: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub notes: Vec<String>,
}

/// One row of `GET /api/macro/indices`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexQuote {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub daily: Option<f64>,
    #[serde(default)]
    pub weekly: Option<f64>,
    #[serde(default)]
    pub monthly: Option<f64>,
}

/// One event of `GET /api/macro/calendar`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalendarEntry {
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, alias = "title")]
    pub event: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

/// `GET /api/macro/sentiment_grid`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SentimentGridResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub grid: Vec<SentimentEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentEntry {
    pub date: String,
    pub bucket: String,
    #[serde(default)]
    pub sentiment: Option<f64>,
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_requires_regime_label() {
        let ok: MacroStateResponse = serde_json::from_str(
            r#"{"macro_regime":{"label":"Risk-On","confidence":0.72,"stability":"stable"},
                "commentary":"ok","market_bias":{"equities":"bullish","crypto":"bearish"}}"#,
        )
        .unwrap();
        assert_eq!(ok.macro_regime.label, "Risk-On");
        assert_eq!(ok.market_bias.crypto.as_deref(), Some("bearish"));
        assert_eq!(ok.market_bias.commodities, None);

        let missing: Result<MacroStateResponse, _> =
            serde_json::from_str(r#"{"macro_regime":{"confidence":0.5}}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_orientation_null_notes() {
        let o: OrientationResponse =
            serde_json::from_str(r#"{"risk":"on","confidence":null,"notes":null}"#).unwrap();
        assert_eq!(o.risk.as_deref(), Some("on"));
        assert_eq!(o.confidence, None);
        assert!(o.notes.is_empty());
    }

    #[test]
    fn test_calendar_title_alias_and_currency() {
        let entries: Vec<CalendarEntry> = serde_json::from_str(
            r#"[{"date":"2026-02-02","time":"14:30","currency":"USD","title":"NFP"},
                {"date":"2026-02-03","event":"CPI","impact":"high","country":"US"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].event.as_deref(), Some("NFP"));
        assert_eq!(entries[0].impact, None);
        assert_eq!(entries[1].country.as_deref(), Some("US"));
    }

    #[test]
    fn test_index_nullable_numbers() {
        let q: IndexQuote =
            serde_json::from_str(r#"{"symbol":"SPX","daily":null,"weekly":2.1}"#).unwrap();
        assert_eq!(q.daily, None);
        assert_eq!(q.weekly, Some(2.1));
        assert_eq!(q.monthly, None);
        assert_eq!(q.name, None);
    }
}
