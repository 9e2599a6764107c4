// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! CostWatch CLI - AI service cost reporting to Slack.
//!
//! # Examples
//!
//! ```bash
//! # Fetch all sources and post the report to Slack
//! costwatch
//!
//! # Same, explicitly
//! costwatch report
//!
//! # Exercise the integrations without posting
//! costwatch check
//!
//! # Fetch only OpenRouter live, canned values for the rest
//! costwatch check --source openrouter
//!
//! # Check and also deliver the assembled message
//! costwatch check --send-to-slack
//! ```

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, report};

// ============================================================================
// CLI Definition
// ============================================================================

/// CostWatch CLI - AI service cost reporting.
#[derive(Parser)]
#[command(name = "costwatch")]
#[command(about = "Posts an AI service cost report to Slack")]
#[command(long_about = r#"
CostWatch polls three AI-provider billing APIs and posts a combined cost
report to a Slack incoming webhook.

Sources:
  • Anthropic prepaid balance (currently disabled upstream)
  • OpenAI organization costs, trailing 7 days
  • OpenRouter credits (total / used / remaining)

Required environment variables:
  ANTHROPIC_ORGANIZATION_ID, OPENAI_ADMIN_KEY,
  OPENROUTER_API_KEY, SLACK_WEBHOOK_URL
"#)]
#[command(version)]
#[command(author = "CostWatch Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'report' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and post the report to Slack (default).
    #[command(visible_alias = "r")]
    Report,

    /// Exercise the integrations and print the assembled message.
    #[command(visible_alias = "c")]
    Check(check::CheckArgs),
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// Missing configuration or an unhandled failure.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("costwatch=debug,info")
    } else {
        EnvFilter::new("costwatch=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Check(args)) => check::run(args).await,
        Some(Commands::Report) | None => report::run().await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::Error as i32);
    }
}
