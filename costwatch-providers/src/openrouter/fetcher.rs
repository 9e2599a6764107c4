//! OpenRouter credits fetcher.

use reqwest::Client;
use tracing::{debug, warn};

use costwatch_core::{CreditSummary, CreditsResult, SourceError};

use super::parser::parse_credits_response;

/// OpenRouter API base URL.
const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api";

/// Credits endpoint.
const CREDITS_ENDPOINT: &str = "/v1/credits";

/// Fetches the credit ledger totals.
#[derive(Debug, Clone)]
pub struct CreditsFetcher {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CreditsFetcher {
    /// Creates a new fetcher.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: OPENROUTER_API_BASE.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the credit summary.
    ///
    /// Failures are returned as the `Err` side of [`CreditsResult`];
    /// this method never propagates an error.
    pub async fn fetch(&self) -> CreditsResult {
        match self.fetch_credits().await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                warn!(error = %e, "Failed to fetch OpenRouter credits");
                Err(e)
            }
        }
    }

    async fn fetch_credits(&self) -> Result<CreditSummary, SourceError> {
        let url = format!("{}{}", self.base_url, CREDITS_ENDPOINT);

        debug!(url = %url, "Fetching OpenRouter credits");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        parse_credits_response(&body)
    }
}
