//! Organization costs response parsing.

use serde::Deserialize;
use tracing::debug;

use costwatch_core::{CostBucket, SourceError};

/// Top-level shape of the organization costs response.
#[derive(Debug, Deserialize)]
pub struct CostsResponse {
    /// Time buckets for the queried window.
    #[serde(default)]
    pub data: Vec<CostBucket>,
}

/// Parses the costs response body into its bucket list.
pub fn parse_costs_response(json_str: &str) -> Result<Vec<CostBucket>, SourceError> {
    debug!(len = json_str.len(), "Parsing organization costs response");

    let response: CostsResponse =
        serde_json::from_str(json_str).map_err(|e| SourceError::Malformed(e.to_string()))?;

    Ok(response.data)
}
