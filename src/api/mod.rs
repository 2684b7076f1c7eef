use crate::api::error::ApiError;
use crate::api::types::{
    CalendarEntry, HealthResponse, IndexQuote, MacroSnapshotResponse, MacroStateResponse,
    OrientationResponse, SentimentGridResponse,
};
use crate::panels::calendar::Impact;

pub(crate) mod client;
pub use client::MacroApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Read-only view of the macro API. One method per endpoint.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MacroApi: Send + Sync {
    /// Base URL the client talks to.
    fn base_url(&self) -> String;

    /// `GET /api/macro/state`
    async fn macro_state(&self) -> Result<MacroStateResponse, ApiError>;

    /// `GET /api/macro/snapshot`
    async fn macro_snapshot(&self) -> Result<MacroSnapshotResponse, ApiError>;

    /// `GET /api/macro/orientation`
    async fn orientation(&self) -> Result<OrientationResponse, ApiError>;

    /// `GET /api/macro/indices`
    async fn indices(&self) -> Result<Vec<IndexQuote>, ApiError>;

    /// `GET /api/macro/calendar?days_ahead=N`, optionally filtered by impact.
    async fn calendar(
        &self,
        days_ahead: u32,
        impact_filter: Option<Impact>,
    ) -> Result<Vec<CalendarEntry>, ApiError>;

    /// `GET /api/macro/sentiment_grid`
    async fn sentiment_grid(&self) -> Result<SentimentGridResponse, ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}
