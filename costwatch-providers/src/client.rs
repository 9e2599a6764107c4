//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds the HTTP client shared by the fetchers and the notifier.
///
/// `reqwest::Client` is an `Arc` around a connection pool, so callers
/// clone it freely.
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialized.
pub fn shared_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .user_agent(concat!("costwatch/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
}
