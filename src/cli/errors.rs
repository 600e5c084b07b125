//! CLI-specific error types
//!
//! All CLI errors are operational: the package could not be read or the
//! report could not be produced. A package that merely fails validation is
//! not an error here; it is a rendered report and exit code 1.

use thiserror::Error;

use crate::report::ReportError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Operational CLI failures
#[derive(Debug, Error)]
pub enum CliError {
    /// File or stdin could not be read
    #[error("[DELIV_CLI_IO_ERROR] {0}")]
    Io(#[from] std::io::Error),

    /// Package model file is not a valid JSON model
    #[error("[DELIV_CLI_BAD_PACKAGE] package model is not valid: {0}")]
    BadPackage(#[from] serde_json::Error),

    /// Report rendering failed
    #[error("[DELIV_CLI_REPORT_ERROR] {0}")]
    Report(#[from] ReportError),
}

impl CliError {
    /// Get the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "DELIV_CLI_IO_ERROR",
            Self::BadPackage(_) => "DELIV_CLI_BAD_PACKAGE",
            Self::Report(_) => "DELIV_CLI_REPORT_ERROR",
        }
    }
}
