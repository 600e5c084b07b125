//! File naming rules.
//!
//! Delivery names are fixed by the standard: "P" followed by exactly seven
//! digits and an upper-case JPG/JPEG/TIF/TIFF extension, and pairwise unique
//! within the package.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::engine::ValidatorConfig;
use crate::model::DeliveryPackage;

use super::codes::ErrorCode;
use super::finding::{ErrorFinding, Finding};

static DELIVERY_NAME: OnceLock<Regex> = OnceLock::new();

fn delivery_name_pattern() -> &'static Regex {
    DELIVERY_NAME.get_or_init(|| {
        Regex::new(r"^P\d{7}\.(JPG|JPEG|TIF|TIFF)$").expect("delivery name pattern compiles")
    })
}

/// Whether a delivery file name conforms to the mandated pattern.
pub fn is_valid_delivery_name(name: &str) -> bool {
    delivery_name_pattern().is_match(name)
}

/// Check every delivery name against the pattern, then flag duplicates.
///
/// Duplicates emit one finding per occurrence beyond the first, in package
/// iteration order.
pub fn check(package: &DeliveryPackage, _config: &ValidatorConfig) -> Vec<ErrorFinding> {
    let mut findings = Vec::new();

    for entry in &package.photo_files {
        if !is_valid_delivery_name(&entry.delivery_file_name) {
            findings.push(
                Finding::new(
                    ErrorCode::InvalidPhotoFileName,
                    "Delivery file name must be \"P\" + 7 digits + JPG/JPEG/TIF/TIFF extension",
                )
                .with_target_file(&entry.delivery_file_name)
                .with_details(format!("original file: {}", entry.original_file_name)),
            );
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for entry in &package.photo_files {
        if !seen.insert(entry.delivery_file_name.as_str()) {
            findings.push(
                Finding::new(
                    ErrorCode::DuplicateFileName,
                    "Delivery file name occurs more than once in the package",
                )
                .with_target_file(&entry.delivery_file_name)
                .with_details(format!("original file: {}", entry.original_file_name)),
            );
        }
    }

    findings
}
