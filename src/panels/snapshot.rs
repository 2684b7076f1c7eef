//! Global risk regime panel.
//!
//! Fed either by `/api/macro/snapshot` (full dashboard) or by
//! `/api/macro/state` (single-panel regime view). Both payloads map onto the
//! same [`RegimeSnapshot`].

use super::{Panel, PanelBody, PanelContext, PanelId};
use crate::api::types::{MacroSnapshotResponse, MacroStateResponse};
use crate::format::{Tone, bias_label, bias_tone, regime_tone, risk_mode_label};

/// Endpoint feeding the panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// `GET /api/macro/snapshot`
    Snapshot,
    /// `GET /api/macro/state`
    State,
}

/// Bias of one asset class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBias {
    pub asset_class: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

impl AssetBias {
    fn new(asset_class: &'static str, value: Option<&str>) -> Self {
        Self {
            asset_class,
            label: bias_label(value),
            tone: bias_tone(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegimeSnapshot {
    pub label: String,
    pub tone: Tone,
    /// Shown only when present.
    pub confidence: Option<f64>,
    pub stability: Option<String>,
    pub commentary: Option<String>,
    pub biases: Vec<AssetBias>,
    pub volatility: Option<String>,
    /// Raw ISO timestamp of the snapshot.
    pub timestamp: Option<String>,
}

pub fn build_from_snapshot(response: MacroSnapshotResponse) -> RegimeSnapshot {
    let (label, tone) = risk_mode_label(response.risk_mode.as_deref());
    let bias = &response.bias;
    RegimeSnapshot {
        label: label.to_string(),
        tone,
        confidence: None,
        stability: None,
        commentary: non_empty(response.comment),
        biases: vec![
            AssetBias::new("Actions", bias.equities.as_deref()),
            AssetBias::new("Taux", bias.rates.as_deref()),
            AssetBias::new("USD", bias.usd.as_deref()),
            AssetBias::new("Crédit", bias.credit.as_deref()),
            AssetBias::new("Matières premières", bias.commodities.as_deref()),
            AssetBias::new("Crypto", bias.crypto.as_deref()),
        ],
        volatility: non_empty(response.volatility),
        timestamp: non_empty(response.timestamp),
    }
}

pub fn build_from_state(response: MacroStateResponse) -> RegimeSnapshot {
    let regime = response.macro_regime;
    let bias = &response.market_bias;
    RegimeSnapshot {
        tone: regime_tone(&regime.label),
        label: regime.label,
        confidence: regime.confidence.filter(|c| c.is_finite()),
        stability: non_empty(regime.stability),
        commentary: non_empty(response.commentary),
        biases: vec![
            AssetBias::new("Actions", bias.equities.as_deref()),
            AssetBias::new("Indices US", bias.indices_us.as_deref()),
            AssetBias::new("Matières premières", bias.commodities.as_deref()),
            AssetBias::new("Crypto", bias.crypto.as_deref()),
        ],
        volatility: None,
        timestamp: None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub struct SnapshotPanel {
    ctx: PanelContext,
    source: SnapshotSource,
}

impl SnapshotPanel {
    pub fn new(ctx: PanelContext, source: SnapshotSource) -> Self {
        Self { ctx, source }
    }
}

#[async_trait::async_trait]
impl Panel for SnapshotPanel {
    fn id(&self) -> PanelId {
        PanelId::Snapshot
    }

    async fn refresh(&self) {
        let result = match self.source {
            SnapshotSource::Snapshot => self
                .ctx
                .api()
                .macro_snapshot()
                .await
                .map(build_from_snapshot),
            SnapshotSource::State => self.ctx.api().macro_state().await.map(build_from_state),
        };
        self.ctx
            .publish(self.id(), result.map(PanelBody::Snapshot))
            .await;
    }
}
