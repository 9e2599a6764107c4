//! OpenAI weekly cost fetcher.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use tracing::{debug, warn};

use costwatch_core::{CostReport, CostReportResult, SourceError};

use super::parser::parse_costs_response;

/// OpenAI API base URL.
const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Organization costs endpoint.
const COSTS_ENDPOINT: &str = "/v1/organization/costs";

/// Length of the reporting window in days.
const WINDOW_DAYS: i64 = 7;

// ============================================================================
// Reporting Window
// ============================================================================

/// A trailing reporting window, pinned at construction.
///
/// The upstream query takes the raw instants as Unix-epoch seconds; the
/// calendar dates shown in the report are derived from those same
/// instants (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    /// Start of the window.
    pub start: DateTime<Utc>,
    /// End of the window.
    pub end: DateTime<Utc>,
}

impl ReportingWindow {
    /// Builds the trailing 7-day window ending at `now`.
    pub fn trailing_week(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(WINDOW_DAYS),
            end: now,
        }
    }
}

// ============================================================================
// Fetcher
// ============================================================================

/// Fetches organization costs for the trailing week.
#[derive(Debug, Clone)]
pub struct CostFetcher {
    client: Client,
    base_url: String,
    admin_key: String,
}

impl CostFetcher {
    /// Creates a new fetcher.
    pub fn new(client: Client, admin_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: OPENAI_API_BASE.to_string(),
            admin_key: admin_key.into(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the weekly cost report.
    ///
    /// Failures are returned as the `Err` side of [`CostReportResult`];
    /// this method never propagates an error.
    pub async fn fetch(&self) -> CostReportResult {
        let window = ReportingWindow::trailing_week(Utc::now());

        match self.fetch_window(window).await {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!(error = %e, "Failed to fetch OpenAI costs");
                Err(e)
            }
        }
    }

    /// Fetches the cost report for an explicit window.
    pub async fn fetch_window(&self, window: ReportingWindow) -> Result<CostReport, SourceError> {
        let url = format!(
            "{}{}?start_time={}&end_time={}",
            self.base_url,
            COSTS_ENDPOINT,
            window.start.timestamp(),
            window.end.timestamp()
        );

        debug!(url = %url, "Fetching OpenAI organization costs");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.admin_key)
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

        let buckets = parse_costs_response(&body)?;

        Ok(CostReport {
            start_date: window.start.date_naive(),
            end_date: window.end.date_naive(),
            buckets,
        })
    }
}
