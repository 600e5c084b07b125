//! Structural rules: required folders, documents, and a non-empty photo list.

use crate::engine::ValidatorConfig;
use crate::model::DeliveryPackage;

use super::codes::ErrorCode;
use super::finding::{ErrorFinding, Finding};

/// Check the package skeleton. Each missing piece maps to one reserved code.
pub fn check(package: &DeliveryPackage, _config: &ValidatorConfig) -> Vec<ErrorFinding> {
    let mut findings = Vec::new();

    if package.root_folder_name.is_empty() {
        findings.push(
            Finding::new(
                ErrorCode::MissingRootFolder,
                "Root folder name is empty; the package must declare its top-level folder",
            )
            .with_target_field("root_folder_name"),
        );
    }

    if package.metadata_document_path.is_empty() {
        findings.push(
            Finding::new(
                ErrorCode::MissingPhotoXml,
                "Package metadata document path is empty",
            )
            .with_target_field("metadata_document_path"),
        );
    }

    if package.picture_folder_path.is_empty() {
        findings.push(
            Finding::new(
                ErrorCode::MissingPicFolder,
                "Picture folder path is empty",
            )
            .with_target_field("picture_folder_path"),
        );
    }

    if package.photo_files.is_empty() {
        findings.push(Finding::new(
            ErrorCode::EmptyPhotoList,
            "Package contains no photos; at least one photo entry is required",
        ));
    }

    findings
}
