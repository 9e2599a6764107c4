//! Slack webhook delivery.

use chrono::Utc;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use costwatch_core::{BalanceResult, CostReportResult, CreditsResult};

use crate::message::{build_report, SlackMessage};

/// Delivery error, caught inside the notifier.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The POST itself failed.
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("webhook returned {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        body: String,
    },
}

/// Posts report messages to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    /// Creates a notifier for the given webhook URL.
    pub fn new(client: Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }

    /// Builds the report message and delivers it.
    ///
    /// Returns `true` on confirmed delivery. Delivery failure is logged
    /// and reported as `false`; it never propagates past this boundary.
    pub async fn notify(
        &self,
        balance: &BalanceResult,
        costs: &CostReportResult,
        credits: &CreditsResult,
    ) -> bool {
        let message = build_report(balance, costs, credits, Utc::now());
        self.deliver(&message).await
    }

    /// Delivers an already-built message.
    pub async fn deliver(&self, message: &SlackMessage) -> bool {
        match self.post(message).await {
            Ok(()) => {
                info!("Slack notification sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "Slack delivery failed");
                false
            }
        }
    }

    async fn post(&self, message: &SlackMessage) -> Result<(), NotifyError> {
        debug!(url = %self.webhook_url, "Posting report to webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
