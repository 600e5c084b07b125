//! Validation engine.
//!
//! Runs the rule catalogue against one immutable package and aggregates the
//! findings. The engine always returns a result, never an error: domain
//! defects become findings so an operator gets an actionable report even for
//! garbage input. Validation is deterministic apart from the completion
//! timestamp.

use chrono::{SecondsFormat, Utc};

use crate::document::{self, DocumentDefect};
use crate::model::DeliveryPackage;
use crate::rules::{self, ErrorCode, Finding};

use super::config::ValidatorConfig;
use super::result::ValidationResult;

/// Validate a delivery package against the full rule catalogue.
///
/// Every rule group runs unconditionally; findings are concatenated in
/// catalogue order and the result is stamped at completion.
pub fn validate(package: &DeliveryPackage, config: &ValidatorConfig) -> ValidationResult {
    let mut errors = Vec::new();
    for rule in rules::ERROR_RULES {
        errors.extend(rule(package, config));
    }

    let mut warnings = Vec::new();
    for rule in rules::WARNING_RULES {
        warnings.extend(rule(package, config));
    }

    ValidationResult::from_findings(&package.root_folder_name, errors, warnings, now_stamp())
}

/// Validate with the default configuration (10 MB file-size threshold).
pub fn validate_with_defaults(package: &DeliveryPackage) -> ValidationResult {
    validate(package, &ValidatorConfig::default())
}

/// Document-only check of a raw metadata document.
///
/// Narrower than [`validate`]: presence and shallow markup well-formedness,
/// independent of the folder/photo model. Field-level reconciliation against
/// the photo model is out of scope here. The result reuses the shared shape
/// so both report renderings apply; `target_folder` stays empty.
pub fn validate_metadata_document(raw: &str) -> ValidationResult {
    let errors = document::scan(raw)
        .into_iter()
        .map(|defect| match defect {
            DocumentDefect::EmptyDocument => Finding::new(
                ErrorCode::MissingPhotoXml,
                "Metadata document is missing or empty",
            ),
            other => Finding::new(
                ErrorCode::MissingPhotoXml,
                "Metadata document is not well-formed",
            )
            .with_details(other.to_string()),
        })
        .collect();

    ValidationResult::from_findings("", errors, Vec::new(), now_stamp())
}

fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
