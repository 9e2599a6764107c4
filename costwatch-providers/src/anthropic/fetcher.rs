//! Anthropic balance fetcher.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use costwatch_core::{AccountBalance, BalanceResult, SourceError};

/// Console API base URL.
const ANTHROPIC_CONSOLE_BASE: &str = "https://console.anthropic.com";

/// Error reported while the integration is switched off.
const DISABLED_MESSAGE: &str = "Anthropic balance integration temporarily disabled";

/// Whether the live endpoint is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Disabled,
    Live,
}

/// Response from the prepaid credits endpoint.
#[derive(Debug, Deserialize)]
struct PrepaidCredits {
    /// Balance in cents.
    amount: f64,
}

/// Fetches the prepaid account balance.
#[derive(Debug, Clone)]
pub struct BalanceFetcher {
    client: Client,
    base_url: String,
    organization_id: String,
    mode: Mode,
}

impl BalanceFetcher {
    /// Creates the fetcher in its current production mode: disabled.
    pub fn new(client: Client, organization_id: impl Into<String>) -> Self {
        Self::with_mode(client, organization_id, Mode::Disabled)
    }

    /// Creates a fetcher that performs the live console call.
    pub fn live(client: Client, organization_id: impl Into<String>) -> Self {
        Self::with_mode(client, organization_id, Mode::Live)
    }

    fn with_mode(client: Client, organization_id: impl Into<String>, mode: Mode) -> Self {
        Self {
            client,
            base_url: ANTHROPIC_CONSOLE_BASE.to_string(),
            organization_id: organization_id.into(),
            mode,
        }
    }

    /// Overrides the console base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the account balance.
    ///
    /// Failures are returned as the `Err` side of [`BalanceResult`];
    /// this method never propagates an error.
    pub async fn fetch(&self) -> BalanceResult {
        if self.mode == Mode::Disabled {
            debug!("Anthropic balance fetch skipped, integration disabled");
            return Err(SourceError::Disabled(DISABLED_MESSAGE.to_string()));
        }

        match self.fetch_live().await {
            Ok(balance) => Ok(balance),
            Err(e) => {
                warn!(error = %e, "Failed to fetch Anthropic balance");
                Err(e)
            }
        }
    }

    async fn fetch_live(&self) -> Result<AccountBalance, SourceError> {
        let url = format!(
            "{}/api/organizations/{}/prepaid/credits",
            self.base_url, self.organization_id
        );

        debug!(url = %url, "Fetching Anthropic prepaid balance");

        let response = self
            .client
            .get(&url)
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

        let credits: PrepaidCredits = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse prepaid credits response");
            SourceError::Malformed(e.to_string())
        })?;

        Ok(AccountBalance::from_cents(credits.amount))
    }
}
