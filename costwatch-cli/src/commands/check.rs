//! Check command - exercise the integrations without posting by default.
//!
//! Prints each source result and the assembled message preview. With
//! `--source`, only the named source is fetched live and the other two
//! use canned values; with `--send-to-slack`, the message is actually
//! delivered to the configured webhook.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;

use costwatch_core::{
    Amount, Config, CostBucket, CostLine, CostReport, CreditSummary, SourceError,
};
use costwatch_notify::{build_report, SlackNotifier};
use costwatch_providers::{shared_client, BalanceFetcher, CostFetcher, CreditsFetcher};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Fetch only this source live; the others use canned values.
    #[arg(long, value_enum)]
    pub source: Option<Source>,

    /// Also deliver the assembled message to the configured webhook.
    #[arg(long)]
    pub send_to_slack: bool,
}

/// Selectable sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Anthropic prepaid balance.
    Anthropic,
    /// OpenAI weekly costs.
    Openai,
    /// OpenRouter credits.
    Openrouter,
}

/// Runs the check command.
pub async fn run(args: &CheckArgs) -> Result<()> {
    let config = Config::from_env()?;
    let client = shared_client();

    let live = |source: Source| args.source.is_none_or(|selected| selected == source);

    // The balance integration is disabled upstream, so "live" and mock
    // are the same fixed error; the fetch costs nothing.
    let balance = BalanceFetcher::new(client.clone(), config.anthropic_organization_id.clone())
        .fetch()
        .await;
    print_result("Anthropic balance", &balance)?;

    let costs = if live(Source::Openai) {
        CostFetcher::new(client.clone(), config.openai_admin_key.clone())
            .fetch()
            .await
    } else {
        Ok(mock_cost_report())
    };
    print_result("OpenAI weekly cost", &costs)?;

    let credits = if live(Source::Openrouter) {
        CreditsFetcher::new(client.clone(), config.openrouter_api_key.clone())
            .fetch()
            .await
    } else {
        Ok(CreditSummary::new(10.0, 3.5))
    };
    print_result("OpenRouter credits", &credits)?;

    let message = build_report(&balance, &costs, &credits, Utc::now());
    println!("Message preview:");
    for line in message.preview() {
        println!("  {line}");
    }

    if args.send_to_slack {
        let notifier = SlackNotifier::new(client, config.slack_webhook_url.clone());
        if notifier.deliver(&message).await {
            println!("\nSlack notification sent successfully!");
        } else {
            println!("\nSlack delivery failed.");
        }
    } else {
        println!("\nSkipping Slack delivery (use --send-to-slack to post).");
    }

    Ok(())
}

/// Canned weekly cost data used when OpenAI is not fetched live.
fn mock_cost_report() -> CostReport {
    let line = |value: f64| CostLine {
        amount: Some(Amount {
            value,
            currency: Some("usd".to_string()),
        }),
    };

    CostReport {
        start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2023, 1, 7).unwrap(),
        buckets: vec![
            CostBucket {
                results: vec![line(5.25)],
            },
            CostBucket {
                results: vec![line(1.75)],
            },
        ],
    }
}

/// Prints one source outcome with banner separators.
fn print_result<T: Serialize>(name: &str, result: &Result<T, SourceError>) -> Result<()> {
    let banner = "=".repeat(50);

    println!("\n{banner}");
    match result {
        Ok(data) => {
            println!("✅ {name}: SUCCESS");
            println!("{}", "-".repeat(50));
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        Err(e) => {
            println!("❌ {name}: FAILED");
            println!("{}", "-".repeat(50));
            println!("Error: {e}");
        }
    }
    println!("{banner}");

    Ok(())
}
