//! Credits response parsing.

use serde::Deserialize;
use tracing::debug;

use costwatch_core::{CreditSummary, SourceError};

/// Top-level shape of the credits response.
#[derive(Debug, Deserialize)]
struct CreditsResponse {
    data: CreditsData,
}

/// Ledger totals within the response.
#[derive(Debug, Deserialize)]
struct CreditsData {
    total_credits: f64,
    total_usage: f64,
}

/// Parses the credits response body into a [`CreditSummary`].
///
/// Missing or non-numeric ledger fields are reported as
/// [`SourceError::Malformed`].
pub fn parse_credits_response(json_str: &str) -> Result<CreditSummary, SourceError> {
    debug!(len = json_str.len(), "Parsing credits response");

    let response: CreditsResponse =
        serde_json::from_str(json_str).map_err(|e| SourceError::Malformed(e.to_string()))?;

    Ok(CreditSummary::new(
        response.data.total_credits,
        response.data.total_usage,
    ))
}
