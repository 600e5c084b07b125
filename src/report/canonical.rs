//! Canonical machine-readable report.
//!
//! The canonical document is the result re-serialized as pretty JSON with
//! key order fixed by field declaration order and codes rendered as their
//! stable strings. Parsing the document back yields a value equal to the
//! original, timestamps verbatim.

use crate::engine::ValidationResult;

use super::errors::{ReportError, ReportResult};

/// Render the canonical JSON document for a result.
pub fn to_canonical_json(result: &ValidationResult) -> ReportResult<String> {
    serde_json::to_string_pretty(result).map_err(ReportError::Render)
}

/// Parse a canonical document back into a result.
pub fn parse_canonical(raw: &str) -> ReportResult<ValidationResult> {
    serde_json::from_str(raw).map_err(ReportError::Parse)
}
