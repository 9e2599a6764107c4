//! Report command - fetch all sources and deliver the Slack report.
//!
//! This is the orchestrator: it validates configuration up front, fans
//! the three source fetches out concurrently, joins unconditionally
//! (every fetcher encodes its own failure as data), and hands all three
//! results to the notifier.

use anyhow::Result;
use futures::future;
use tracing::info;

use costwatch_core::Config;
use costwatch_notify::SlackNotifier;
use costwatch_providers::{shared_client, BalanceFetcher, CostFetcher, CreditsFetcher};

/// The wired-up fetch/notify pipeline.
pub struct Pipeline {
    balance: BalanceFetcher,
    costs: CostFetcher,
    credits: CreditsFetcher,
    notifier: SlackNotifier,
}

impl Pipeline {
    /// Builds the pipeline from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = shared_client();

        Self {
            balance: BalanceFetcher::new(
                client.clone(),
                config.anthropic_organization_id.clone(),
            ),
            costs: CostFetcher::new(client.clone(), config.openai_admin_key.clone()),
            credits: CreditsFetcher::new(client.clone(), config.openrouter_api_key.clone()),
            notifier: SlackNotifier::new(client, config.slack_webhook_url.clone()),
        }
    }

    /// Fetches the three sources concurrently and delivers the report.
    ///
    /// The join waits for all three branches regardless of individual
    /// outcomes; the message is always assembled and posted. Returns the
    /// delivery outcome.
    pub async fn run(&self) -> bool {
        let (balance, costs, credits) = future::join3(
            self.balance.fetch(),
            self.costs.fetch(),
            self.credits.fetch(),
        )
        .await;

        info!(
            balance_ok = balance.is_ok(),
            costs_ok = costs.is_ok(),
            credits_ok = credits.is_ok(),
            "Source fetches complete"
        );

        self.notifier.notify(&balance, &costs, &credits).await
    }
}

/// Runs the report command.
pub async fn run() -> Result<()> {
    let config = Config::from_env()?;

    println!("Fetching AI service cost data...");

    let delivered = Pipeline::from_config(&config).run().await;

    if delivered {
        println!("Process completed successfully!");
    } else {
        println!("Report assembled, but Slack delivery failed.");
    }

    Ok(())
}
