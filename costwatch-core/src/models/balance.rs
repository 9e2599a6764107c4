//! Account balance types.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Outcome of the account balance fetch.
pub type BalanceResult = Result<AccountBalance, SourceError>;

/// Prepaid account balance, in dollars.
///
/// The upstream ledger reports cents; the fetcher converts before
/// constructing this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Current balance in USD.
    pub balance: f64,
}

impl AccountBalance {
    /// Creates a balance from an upstream amount in cents.
    pub fn from_cents(cents: f64) -> Self {
        Self {
            balance: cents / 100.0,
        }
    }
}
