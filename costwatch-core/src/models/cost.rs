//! Weekly cost report types.
//!
//! The report carries the upstream per-bucket data unmodified; summing the
//! leaf amounts is left to the renderer so a partial or empty response can
//! still be displayed faithfully.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Outcome of the weekly cost fetch.
pub type CostReportResult = Result<CostReport, SourceError>;

// ============================================================================
// Cost Report
// ============================================================================

/// Aggregated usage costs over a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// First calendar day of the window.
    pub start_date: NaiveDate,
    /// Last calendar day of the window.
    pub end_date: NaiveDate,
    /// Per-bucket cost data as returned upstream.
    #[serde(default)]
    pub buckets: Vec<CostBucket>,
}

impl CostReport {
    /// Sums every line amount across all buckets.
    ///
    /// Lines without an amount contribute nothing.
    pub fn total(&self) -> f64 {
        self.buckets
            .iter()
            .flat_map(|bucket| &bucket.results)
            .filter_map(|line| line.amount.as_ref())
            .map(|amount| amount.value)
            .sum()
    }

    /// Returns true if any bucket carries at least one line.
    ///
    /// A window with zero buckets, or buckets that are all empty, has no
    /// usage and must not be rendered as a zero total.
    pub fn has_usage(&self) -> bool {
        self.buckets.iter().any(|bucket| !bucket.results.is_empty())
    }
}

// ============================================================================
// Bucket Data
// ============================================================================

/// One time bucket from the upstream cost report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBucket {
    /// Cost lines within this bucket.
    #[serde(default)]
    pub results: Vec<CostLine>,
}

/// A single cost line within a bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    /// Monetary amount for this line, if reported.
    #[serde(default)]
    pub amount: Option<Amount>,
}

/// A monetary amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Numeric value.
    pub value: f64,
    /// Currency code, if reported.
    #[serde(default)]
    pub currency: Option<String>,
}
