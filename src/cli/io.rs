//! File and stdin I/O for the CLI
//!
//! The package model arrives as a JSON document, one file per package. A
//! path of "-" reads from stdin instead.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::model::DeliveryPackage;

use super::errors::CliResult;

/// Read and deserialize a package model from a file or stdin.
pub fn read_package(path: &Path) -> CliResult<DeliveryPackage> {
    let raw = read_raw(path)?;
    let package = serde_json::from_str(&raw)?;
    Ok(package)
}

/// Read a raw metadata document from a file or stdin.
pub fn read_document(path: &Path) -> CliResult<String> {
    read_raw(path)
}

/// Write a rendered report to stdout.
pub fn write_report(rendered: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn read_raw(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
