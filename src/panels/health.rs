//! Service liveness panel.

use super::{Panel, PanelBody, PanelContext, PanelId};
use crate::api::types::HealthResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    /// Only the literal `ok` counts as healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "ok"
    }

    pub fn label(&self) -> String {
        if self.is_healthy() {
            "API OK".to_string()
        } else {
            format!("API dégradée ({})", self.status)
        }
    }
}

impl From<HealthResponse> for HealthStatus {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
        }
    }
}

pub struct HealthPanel {
    ctx: PanelContext,
}

impl HealthPanel {
    pub fn new(ctx: PanelContext) -> Self {
        Self { ctx }
    }
}

#[async_trait::async_trait]
impl Panel for HealthPanel {
    fn id(&self) -> PanelId {
        PanelId::Health
    }

    async fn refresh(&self) {
        let result = self
            .ctx
            .api()
            .health()
            .await
            .map(|r| PanelBody::Health(r.into()));
        self.ctx.publish(self.id(), result).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ok_is_healthy() {
        let status = |s: &str| HealthStatus {
            status: s.to_string(),
        };
        assert!(status("ok").is_healthy());
        assert!(!status("OK").is_healthy());
        assert!(!status("degraded").is_healthy());
        assert_eq!(status("ok").label(), "API OK");
        assert_eq!(status("degraded").label(), "API dégradée (degraded)");
    }
}
