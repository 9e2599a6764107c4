// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `CostWatch` Providers
//!
//! Upstream billing-API integrations for the `CostWatch` reporter.
//!
//! One module per provider, each owning its wire types, parsing, and an
//! async fetcher:
//!
//! - [`anthropic`] - Console prepaid balance (disabled by default, the
//!   live call is kept pluggable)
//! - [`openai`] - Organization cost report over a trailing 7-day window
//! - [`openrouter`] - Credit ledger (total / used / remaining)
//!
//! Every fetcher converts its own failures into a
//! [`costwatch_core::SourceError`] and returns it as data. A failing
//! source never aborts the others and never propagates an error past its
//! own boundary.

pub mod anthropic;
pub mod client;
pub mod openai;
pub mod openrouter;

pub use anthropic::BalanceFetcher;
pub use client::shared_client;
pub use openai::CostFetcher;
pub use openrouter::CreditsFetcher;
