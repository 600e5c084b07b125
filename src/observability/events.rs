//! Event names emitted by the CLI.

/// A package validation run began.
pub const VALIDATION_STARTED: &str = "validation_started";

/// A package validation run finished; fields carry the verdict and counts.
pub const VALIDATION_COMPLETED: &str = "validation_completed";

/// A metadata document check finished.
pub const DOCUMENT_CHECKED: &str = "document_checked";
