//! A single finding produced by one rule against one package.

use serde::{Deserialize, Serialize};

use super::codes::{ErrorCode, WarningCode};

/// One error or warning, parameterized by its code catalogue so an error
/// code can never end up in the warning list or vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding<C> {
    /// Which rule fired. Stable across versions.
    pub code: C,

    /// Human-readable description of the defect.
    pub message: String,

    /// Delivery file the defect was found in, when file-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_file: Option<String>,

    /// Metadata field the defect was found in, when field-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field: Option<String>,

    /// Extra context for locating or fixing the defect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A finding from the error catalogue.
pub type ErrorFinding = Finding<ErrorCode>;

/// A finding from the warning catalogue.
pub type WarningFinding = Finding<WarningCode>;

impl<C> Finding<C> {
    /// Create a finding with only code and message; targets attach via
    /// the `with_*` builders.
    pub fn new(code: C, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            target_file: None,
            target_field: None,
            details: None,
        }
    }

    /// Attach the delivery file the finding points at.
    pub fn with_target_file(mut self, file: impl Into<String>) -> Self {
        self.target_file = Some(file.into());
        self
    }

    /// Attach the metadata field the finding points at.
    pub fn with_target_field(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    /// Attach free-form locating context.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
