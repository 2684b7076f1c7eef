//! Macro API Client
//!
//! Plain JSON-over-HTTP client for the dashboard endpoints. No retries and no
//! explicit timeouts: a failed call is reported once and the next refresh
//! cycle tries again.

use crate::api::MacroApi;
use crate::api::error::ApiError;
use crate::api::types::{
    CalendarEntry, HealthResponse, IndexQuote, MacroSnapshotResponse, MacroStateResponse,
    OrientationResponse, SentimentGridResponse,
};
use crate::environment::Environment;
use crate::panels::calendar::Impact;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("macro-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct MacroApiClient {
    client: Client,
    environment: Environment,
}

impl MacroApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

/// Path and query of the calendar endpoint.
fn calendar_endpoint(days_ahead: u32, impact_filter: Option<Impact>) -> String {
    match impact_filter {
        Some(impact) => format!(
            "api/macro/calendar?days_ahead={}&impact_filter={}",
            days_ahead,
            impact.as_str()
        ),
        None => format!("api/macro/calendar?days_ahead={}", days_ahead),
    }
}

#[async_trait::async_trait]
impl MacroApi for MacroApiClient {
    fn base_url(&self) -> String {
        self.environment.api_url()
    }

    async fn macro_state(&self) -> Result<MacroStateResponse, ApiError> {
        self.get_request("api/macro/state").await
    }

    async fn macro_snapshot(&self) -> Result<MacroSnapshotResponse, ApiError> {
        self.get_request("api/macro/snapshot").await
    }

    async fn orientation(&self) -> Result<OrientationResponse, ApiError> {
        self.get_request("api/macro/orientation").await
    }

    async fn indices(&self) -> Result<Vec<IndexQuote>, ApiError> {
        self.get_request("api/macro/indices").await
    }

    async fn calendar(
        &self,
        days_ahead: u32,
        impact_filter: Option<Impact>,
    ) -> Result<Vec<CalendarEntry>, ApiError> {
        self.get_request(&calendar_endpoint(days_ahead, impact_filter))
            .await
    }

    async fn sentiment_grid(&self) -> Result<SentimentGridResponse, ApiError> {
        self.get_request("api/macro/sentiment_grid").await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_request("health").await
    }
}
