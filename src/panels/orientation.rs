//! Directional bias summary panel.

use super::{Panel, PanelBody, PanelContext, PanelId};
use crate::api::types::OrientationResponse;
use crate::format::{Tone, orientation_label};

#[derive(Debug, Clone, PartialEq)]
pub struct OrientationView {
    pub label: &'static str,
    pub tone: Tone,
    pub confidence: Option<f64>,
    pub comment: Option<String>,
    /// May be empty.
    pub notes: Vec<String>,
}

pub fn build_view(response: OrientationResponse) -> OrientationView {
    let (label, tone) = orientation_label(response.risk.as_deref());
    OrientationView {
        label,
        tone,
        confidence: response.confidence.filter(|c| c.is_finite()),
        comment: response.comment.filter(|c| !c.trim().is_empty()),
        notes: response
            .notes
            .into_iter()
            .filter(|n| !n.trim().is_empty())
            .collect(),
    }
}

pub struct OrientationPanel {
    ctx: PanelContext,
}

impl OrientationPanel {
    pub fn new(ctx: PanelContext) -> Self {
        Self { ctx }
    }
}

#[async_trait::async_trait]
impl Panel for OrientationPanel {
    fn id(&self) -> PanelId {
        PanelId::Orientation
    }

    async fn refresh(&self) {
        let result = self
            .ctx
            .api()
            .orientation()
            .await
            .map(|r| PanelBody::Orientation(build_view(r)));
        self.ctx.publish(self.id(), result).await;
    }
}
