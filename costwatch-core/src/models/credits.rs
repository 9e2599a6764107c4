//! Credit ledger types.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Outcome of the credit ledger fetch.
pub type CreditsResult = Result<CreditSummary, SourceError>;

/// Credit ledger snapshot.
///
/// `remaining` is fixed at fetch time from the upstream totals; it is not
/// re-derived later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Credits purchased in total.
    pub total: f64,
    /// Credits consumed so far.
    pub used: f64,
    /// Credits left (`total - used`).
    pub remaining: f64,
}

impl CreditSummary {
    /// Builds a summary from the upstream totals, computing `remaining`.
    pub fn new(total: f64, used: f64) -> Self {
        Self {
            total,
            used,
            remaining: total - used,
        }
    }
}
