//! Warning rules: review-worthy but not blocking.
//!
//! Order: the package-level representative-photo check first, then one pass
//! over entries emitting location and size warnings per entry.

use crate::engine::ValidatorConfig;
use crate::model::DeliveryPackage;

use super::codes::WarningCode;
use super::finding::{Finding, WarningFinding};

/// Check for missing representative photo, missing locations, and oversized
/// binaries. The size threshold comes from the configuration; everything
/// else is fixed by the standard.
pub fn check(package: &DeliveryPackage, config: &ValidatorConfig) -> Vec<WarningFinding> {
    let mut findings = Vec::new();

    let has_representative = package
        .photo_files
        .iter()
        .any(|entry| entry.photo_info.is_representative_photo);
    if !has_representative {
        findings.push(Finding::new(
            WarningCode::NoRepresentativePhoto,
            "No photo in the package is flagged as representative",
        ));
    }

    let threshold = config.max_file_size_bytes();
    for entry in &package.photo_files {
        let location_missing = entry
            .photo_info
            .shooting_location
            .as_deref()
            .map_or(true, str::is_empty);
        if location_missing {
            findings.push(
                Finding::new(
                    WarningCode::MissingShootingLocation,
                    "Shooting location is not recorded",
                )
                .with_target_file(&entry.delivery_file_name)
                .with_target_field("shooting_location"),
            );
        }

        if entry.file_size_bytes > threshold {
            findings.push(
                Finding::new(
                    WarningCode::LargeFileSize,
                    format!(
                        "Photo binary exceeds the {} MB size threshold",
                        config.max_file_size_mb
                    ),
                )
                .with_target_file(&entry.delivery_file_name)
                .with_details(format!("{} bytes", entry.file_size_bytes)),
            );
        }
    }

    findings
}
