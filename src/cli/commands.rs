//! CLI command implementations
//!
//! Thin wrappers over the library: load input, run the engine, render the
//! chosen report to stdout, log the run to stderr, and map the verdict to
//! an exit status. Exit codes: 0 package valid, 1 package has errors,
//! 2 operational failure (mapped in main).

use std::path::Path;

use crate::engine::{self, ValidationResult, ValidatorConfig};
use crate::observability::{
    Logger, Severity, DOCUMENT_CHECKED, VALIDATION_COMPLETED, VALIDATION_STARTED,
};
use crate::report;

use super::args::{Cli, Command, ReportFormat};
use super::errors::CliResult;
use super::io::{read_document, read_package, write_report};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<i32> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run one command and return the process exit status.
pub fn run_command(command: Command) -> CliResult<i32> {
    match command {
        Command::Validate {
            package,
            max_file_size_mb,
            format,
        } => validate(&package, max_file_size_mb, format),
        Command::CheckDocument { document, format } => check_document(&document, format),
    }
}

fn validate(path: &Path, max_file_size_mb: u64, format: ReportFormat) -> CliResult<i32> {
    let shown_path = path.display().to_string();
    Logger::log_stderr(
        Severity::Info,
        VALIDATION_STARTED,
        &[("package", &shown_path)],
    );

    let package = read_package(path)?;
    let config = ValidatorConfig::with_max_file_size_mb(max_file_size_mb);
    let result = engine::validate(&package, &config);

    emit(&result, format)?;

    Logger::log_stderr(
        Severity::Info,
        VALIDATION_COMPLETED,
        &[
            ("errors", &result.error_count().to_string()),
            ("package", &shown_path),
            ("valid", if result.is_valid { "true" } else { "false" }),
            ("warnings", &result.warning_count().to_string()),
        ],
    );

    Ok(exit_status(&result))
}

fn check_document(path: &Path, format: ReportFormat) -> CliResult<i32> {
    let shown_path = path.display().to_string();
    let raw = read_document(path)?;
    let result = engine::validate_metadata_document(&raw);

    emit(&result, format)?;

    Logger::log_stderr(
        Severity::Info,
        DOCUMENT_CHECKED,
        &[
            ("document", &shown_path),
            ("errors", &result.error_count().to_string()),
            ("valid", if result.is_valid { "true" } else { "false" }),
        ],
    );

    Ok(exit_status(&result))
}

fn emit(result: &ValidationResult, format: ReportFormat) -> CliResult<()> {
    let rendered = match format {
        ReportFormat::Text => report::render_text(result),
        ReportFormat::Json => report::to_canonical_json(result)?,
    };
    write_report(&rendered)
}

fn exit_status(result: &ValidationResult) -> i32 {
    if result.is_valid {
        0
    } else {
        1
    }
}
