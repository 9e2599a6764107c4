// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `CostWatch` Core
//!
//! Core types, models, and configuration for the `CostWatch` reporter.
//!
//! This crate provides the foundational abstractions used across the other
//! `CostWatch` crates, including:
//!
//! - Domain models (account balance, weekly cost report, credit ledger)
//! - Per-source result and error types
//! - The application configuration struct
//!
//! ## Key Types
//!
//! ### Source results
//! - [`BalanceResult`] - Outcome of the Anthropic balance fetch
//! - [`CostReportResult`] - Outcome of the OpenAI weekly cost fetch
//! - [`CreditsResult`] - Outcome of the OpenRouter credits fetch
//! - [`SourceError`] - Why a single source failed, carried as data
//!
//! ### Models
//! - [`AccountBalance`] - Prepaid account balance
//! - [`CostReport`] - Weekly cost report with raw per-bucket data
//! - [`CreditSummary`] - Credit ledger totals
//!
//! ### Configuration
//! - [`Config`] - Explicit configuration, built once and passed by reference

pub mod config;
pub mod error;
pub mod models;

// Re-export config types
pub use config::Config;

// Re-export error types
pub use error::{ConfigError, SourceError};

// Re-export all model types
pub use models::{
    AccountBalance,
    Amount,
    BalanceResult,
    CostBucket,
    CostLine,
    CostReport,
    CostReportResult,
    CreditSummary,
    CreditsResult,
};
