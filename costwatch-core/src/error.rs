//! Core error types for `CostWatch`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading/validation error.
///
/// Raised before any network activity; the CLI maps it to exit code 1.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required values are absent or blank.
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),

    /// A value is present but unusable.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        /// Name of the offending variable.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Why a single upstream source failed.
///
/// Every fetcher converts its own failures into this type and returns it as
/// the `Err` side of its result. It never crosses a fetcher boundary as a
/// propagating error, so it is `Clone` and serializable rather than a
/// wrapper around transport error types.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SourceError {
    /// The integration is switched off on our side.
    #[error("{0}")]
    Disabled(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}
