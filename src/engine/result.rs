//! Validation result aggregate.

use serde::{Deserialize, Serialize};

use crate::rules::{ErrorFinding, WarningFinding};

/// Outcome of one validation pass. Immutable once produced; the report
/// formatters take it by reference and never mutate it.
///
/// Field order is the canonical document's key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty. Warnings never affect validity.
    pub is_valid: bool,

    /// Blocking findings, in rule-catalogue order.
    pub errors: Vec<ErrorFinding>,

    /// Review findings, in rule-catalogue order.
    pub warnings: Vec<WarningFinding>,

    /// RFC 3339 timestamp taken at validation completion.
    pub validated_at: String,

    /// Echo of the package's root folder name. Empty for document-only
    /// validations.
    pub target_folder: String,
}

impl ValidationResult {
    /// Assemble a result, deriving `is_valid` from the error list.
    pub fn from_findings(
        target_folder: impl Into<String>,
        errors: Vec<ErrorFinding>,
        warnings: Vec<WarningFinding>,
        validated_at: String,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            validated_at,
            target_folder: target_folder.into(),
        }
    }

    /// Number of blocking findings.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of review findings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
