//! Anthropic account balance integration.
//!
//! The console prepaid-credits endpoint currently rejects our
//! authentication, so the default fetcher is constructed disabled and
//! reports a fixed unavailable error without touching the network. The
//! live call stays implemented behind [`BalanceFetcher::live`] so it can
//! be re-enabled at the construction site without changing any caller.

mod fetcher;

pub use fetcher::BalanceFetcher;
