//! Report formatting error types.

use thiserror::Error;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Failures at the canonical-document boundary. Domain defects are never
/// errors here; they live inside the result being rendered.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Result could not be serialized to the canonical document
    #[error("Failed to render canonical report: {0}")]
    Render(serde_json::Error),

    /// Canonical document could not be parsed back into a result
    #[error("Failed to parse canonical report: {0}")]
    Parse(serde_json::Error),
}
