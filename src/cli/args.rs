//! CLI argument definitions using clap
//!
//! Commands:
//! - delivcheck validate --package <path.json> [--max-file-size-mb N] [--format text|json]
//! - delivcheck check-document --document <path> [--format text|json]
//!
//! A package path of "-" reads the model from stdin.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// delivcheck - compliance validator for electronic photo delivery packages
#[derive(Parser, Debug)]
#[command(name = "delivcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an assembled delivery package model (JSON)
    Validate {
        /// Path to the package model, or "-" for stdin
        #[arg(long)]
        package: PathBuf,

        /// Threshold for the large-file warning, in megabytes
        #[arg(long, default_value_t = 10)]
        max_file_size_mb: u64,

        /// Report rendering
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Check a raw metadata document for presence and well-formedness
    CheckDocument {
        /// Path to the metadata document, or "-" for stdin
        #[arg(long)]
        document: PathBuf,

        /// Report rendering
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
}

/// Which rendering of the result goes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Text,
    /// Canonical JSON document
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
