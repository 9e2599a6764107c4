//! Slack Block Kit message assembly.
//!
//! The report message has a fixed shape: header, generation timestamp,
//! then one section per source (balance, weekly cost, credits) separated
//! by dividers. Sources that failed render a uniform error placeholder in
//! their section; the message is always complete.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use costwatch_core::{BalanceResult, CostReportResult, CreditsResult};

use crate::format::{format_cost_report, format_currency};

/// Report timestamps are rendered in Japan Standard Time (UTC+9, no DST).
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Report title.
const REPORT_TITLE: &str = "🤖 AI Services Cost Report";

// ============================================================================
// Wire Types
// ============================================================================

/// A Slack incoming-webhook payload.
#[derive(Debug, Serialize)]
pub struct SlackMessage {
    /// Block Kit blocks, in display order.
    pub blocks: Vec<SlackBlock>,
}

impl SlackMessage {
    /// Returns the rendered text of each block, for console previews.
    ///
    /// Dividers appear as their block type name.
    pub fn preview(&self) -> Vec<String> {
        self.blocks
            .iter()
            .map(|block| match block {
                SlackBlock::Header { text } | SlackBlock::Section { text } => text.text.clone(),
                SlackBlock::Context { elements } => elements
                    .iter()
                    .map(|e| e.text.clone())
                    .collect::<Vec<_>>()
                    .join(" "),
                SlackBlock::Divider => "divider".to_string(),
            })
            .collect()
    }
}

/// A Block Kit block.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackBlock {
    /// Title block with plain text.
    Header {
        /// Block text.
        text: SlackText,
    },
    /// Section block with markdown text.
    Section {
        /// Block text.
        text: SlackText,
    },
    /// Divider line.
    Divider,
    /// Context block for metadata.
    Context {
        /// Context elements.
        elements: Vec<SlackText>,
    },
}

/// A Block Kit text object.
#[derive(Debug, Serialize)]
pub struct SlackText {
    #[serde(rename = "type")]
    text_type: &'static str,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<bool>,
}

impl SlackText {
    fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            text_type: "mrkdwn",
            text: text.into(),
            emoji: None,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: Some(true),
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Builds the report message from the three source results.
///
/// `now` is injected so tests can pin the generation timestamp.
pub fn build_report(
    balance: &BalanceResult,
    costs: &CostReportResult,
    credits: &CreditsResult,
    now: DateTime<Utc>,
) -> SlackMessage {
    let blocks = vec![
        SlackBlock::Header {
            text: SlackText::plain(REPORT_TITLE),
        },
        SlackBlock::Context {
            elements: vec![SlackText::plain(format!(
                "Report generated at {}",
                report_timestamp(now)
            ))],
        },
        SlackBlock::Divider,
        SlackBlock::Section {
            text: SlackText::mrkdwn(balance_section(balance)),
        },
        SlackBlock::Divider,
        SlackBlock::Section {
            text: SlackText::mrkdwn(format_cost_report(costs)),
        },
        SlackBlock::Divider,
        SlackBlock::Section {
            text: SlackText::mrkdwn(credits_section(credits)),
        },
    ];

    SlackMessage { blocks }
}

/// Renders `now` as `YYYY-MM-DD HH:MM:SS` in JST.
fn report_timestamp(now: DateTime<Utc>) -> String {
    let jst_offset =
        FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is within bounds");
    now.with_timezone(&jst_offset)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn balance_section(balance: &BalanceResult) -> String {
    match balance {
        Ok(balance) => format!(
            "*Claude Account Balance:* {}",
            format_currency(balance.balance)
        ),
        Err(e) => format!("*Claude Account Balance:* Error fetching data - {e}"),
    }
}

fn credits_section(credits: &CreditsResult) -> String {
    match credits {
        Ok(summary) => format!(
            "*OpenRouter Balance:*\n• Total Credits: {}\n• Used: {}\n• Remaining: {}",
            format_currency(summary.total),
            format_currency(summary.used),
            format_currency(summary.remaining)
        ),
        Err(e) => format!("*OpenRouter Balance:* Error fetching data - {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use costwatch_core::{AccountBalance, CreditSummary, SourceError};

    fn sample_inputs() -> (BalanceResult, CostReportResult, CreditsResult) {
        (
            Err(SourceError::Disabled("integration disabled".to_string())),
            Err(SourceError::Status(500)),
            Ok(CreditSummary::new(10.0, 3.5)),
        )
    }

    #[test]
    fn test_timestamp_is_rendered_in_jst() {
        // 2023-06-01 15:04:05 UTC is 2023-06-02 00:04:05 in Tokyo.
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 15, 4, 5).unwrap();
        assert_eq!(report_timestamp(now), "2023-06-02 00:04:05");
    }

    #[test]
    fn test_block_order_is_fixed() {
        let (balance, costs, credits) = sample_inputs();
        let message = build_report(&balance, &costs, &credits, Utc::now());

        let preview = message.preview();
        assert_eq!(preview.len(), 8);
        assert_eq!(preview[0], REPORT_TITLE);
        assert!(preview[1].starts_with("Report generated at "));
        assert_eq!(preview[2], "divider");
        assert!(preview[3].contains("Claude Account Balance"));
        assert_eq!(preview[4], "divider");
        assert!(preview[5].contains("OpenAI Weekly API Cost"));
        assert_eq!(preview[6], "divider");
        assert!(preview[7].contains("OpenRouter Balance"));
    }

    #[test]
    fn test_one_placeholder_per_failed_source() {
        let (balance, costs, credits) = sample_inputs();
        let message = build_report(&balance, &costs, &credits, Utc::now());

        let sections = message.preview();
        let placeholders = sections
            .iter()
            .filter(|text| text.contains("Error fetching data"))
            .count();

        // Two failed sources, one placeholder each; the successful credit
        // section renders data instead.
        assert_eq!(placeholders, 2);
        assert!(sections[7].contains("• Total Credits: $10.00"));
        assert!(sections[7].contains("• Used: $3.50"));
        assert!(sections[7].contains("• Remaining: $6.50"));
    }

    #[test]
    fn test_successful_balance_renders_currency() {
        let balance: BalanceResult = Ok(AccountBalance { balance: 42.5 });
        let costs: CostReportResult = Err(SourceError::Status(500));
        let credits: CreditsResult = Err(SourceError::Status(500));

        let message = build_report(&balance, &costs, &credits, Utc::now());
        let sections = message.preview();

        assert!(sections[3].contains("$42.50"));
        assert!(!sections[3].contains("Error fetching data"));
    }

    #[test]
    fn test_wire_format_matches_block_kit() {
        let (balance, costs, credits) = sample_inputs();
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 15, 4, 5).unwrap();
        let message = build_report(&balance, &costs, &credits, now);

        let json = serde_json::to_value(&message).unwrap();
        let blocks = json["blocks"].as_array().unwrap();

        assert_eq!(blocks[0]["type"], "header");
        assert_eq!(blocks[0]["text"]["type"], "plain_text");
        assert_eq!(blocks[0]["text"]["emoji"], true);
        assert_eq!(blocks[1]["type"], "context");
        assert_eq!(
            blocks[1]["elements"][0]["text"],
            "Report generated at 2023-06-02 00:04:05"
        );
        assert_eq!(blocks[2]["type"], "divider");
        assert_eq!(blocks[3]["type"], "section");
        assert_eq!(blocks[3]["text"]["type"], "mrkdwn");
        // Dividers serialize with no extra fields.
        assert!(blocks[2].get("text").is_none());
    }
}
