//! Validator Invariant Tests
//!
//! Tests for the package validation contract:
//! - Every rule group runs unconditionally; one pass surfaces all defects
//! - Findings appear in rule-catalogue order
//! - is_valid is derived from the error list alone
//! - Validation is deterministic (timestamps aside)

use delivcheck::engine::{validate, validate_with_defaults, ValidatorConfig};
use delivcheck::model::{DeliveryPackage, PhotoFileEntry, PhotoInfo};
use delivcheck::rules::{ErrorCode, WarningCode};

// =============================================================================
// Helper Functions
// =============================================================================

fn photo_info(number: u32) -> PhotoInfo {
    PhotoInfo {
        photo_number: number,
        major_category: "工事".to_string(),
        category: "施工状況写真".to_string(),
        title: "配筋状況".to_string(),
        shooting_date: "2024-01-15".to_string(),
        shooting_location: Some("第一工区".to_string()),
        is_representative_photo: number == 1,
        is_submission_frequency_photo: false,
        has_drawing: false,
    }
}

fn entry(delivery_name: &str, number: u32) -> PhotoFileEntry {
    PhotoFileEntry {
        original_file_name: format!("IMG_{:04}.jpg", number),
        delivery_file_name: delivery_name.to_string(),
        file_path: format!("PHOTO/PIC/{}", delivery_name),
        file_size_bytes: 2 * 1024 * 1024,
        photo_info: photo_info(number),
    }
}

fn package(entries: Vec<PhotoFileEntry>) -> DeliveryPackage {
    DeliveryPackage {
        root_folder_name: "PHOTO".to_string(),
        metadata_document_path: "PHOTO/PHOTO.XML".to_string(),
        picture_folder_path: "PHOTO/PIC".to_string(),
        photo_files: entries,
        drawing_files: Vec::new(),
    }
}

fn error_codes(result: &delivcheck::engine::ValidationResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|f| f.code).collect()
}

fn warning_codes(result: &delivcheck::engine::ValidationResult) -> Vec<WarningCode> {
    result.warnings.iter().map(|f| f.code).collect()
}

// =============================================================================
// Well-Formed Package Tests
// =============================================================================

/// Scenario: a single fully-populated entry passes with no findings.
#[test]
fn test_well_formed_single_entry_is_valid() {
    let result = validate_with_defaults(&package(vec![entry("P0000001.JPG", 1)]));

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.target_folder, "PHOTO");
    assert!(!result.validated_at.is_empty());
}

#[test]
fn test_well_formed_multi_entry_is_valid() {
    let result = validate_with_defaults(&package(vec![
        entry("P0000001.JPG", 1),
        entry("P0000002.JPG", 2),
        entry("P0000003.TIF", 3),
    ]));

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

// =============================================================================
// Structural Rule Tests
// =============================================================================

/// Empty root folder name produces exactly one MISSING_ROOT_FOLDER error.
#[test]
fn test_empty_root_folder_name() {
    let mut pkg = package(vec![entry("P0000001.JPG", 1)]);
    pkg.root_folder_name = String::new();

    let result = validate_with_defaults(&pkg);
    assert!(!result.is_valid);
    assert_eq!(error_codes(&result), vec![ErrorCode::MissingRootFolder]);
    // target_folder echoes the (empty) root folder name verbatim
    assert_eq!(result.target_folder, "");
}

#[test]
fn test_empty_metadata_document_path() {
    let mut pkg = package(vec![entry("P0000001.JPG", 1)]);
    pkg.metadata_document_path = String::new();

    let result = validate_with_defaults(&pkg);
    assert_eq!(error_codes(&result), vec![ErrorCode::MissingPhotoXml]);
}

#[test]
fn test_empty_picture_folder_path() {
    let mut pkg = package(vec![entry("P0000001.JPG", 1)]);
    pkg.picture_folder_path = String::new();

    let result = validate_with_defaults(&pkg);
    assert_eq!(error_codes(&result), vec![ErrorCode::MissingPicFolder]);
}

#[test]
fn test_empty_photo_list() {
    let result = validate_with_defaults(&package(Vec::new()));

    assert!(!result.is_valid);
    assert_eq!(error_codes(&result), vec![ErrorCode::EmptyPhotoList]);
    // with no photos there is also no representative photo
    assert_eq!(
        warning_codes(&result),
        vec![WarningCode::NoRepresentativePhoto]
    );
}

// =============================================================================
// Naming Rule Tests
// =============================================================================

/// Scenario: a nonconforming delivery name fails with the name attached.
#[test]
fn test_invalid_delivery_file_name() {
    let result = validate_with_defaults(&package(vec![entry("invalid.jpg", 1)]));

    assert!(!result.is_valid);
    assert_eq!(error_codes(&result), vec![ErrorCode::InvalidPhotoFileName]);
    assert_eq!(
        result.errors[0].target_file.as_deref(),
        Some("invalid.jpg")
    );
}

/// Scenario: two entries sharing one delivery name produce one duplicate
/// finding (the occurrence beyond the first).
#[test]
fn test_duplicate_delivery_file_name() {
    let result = validate_with_defaults(&package(vec![
        entry("P0000001.JPG", 1),
        entry("P0000001.JPG", 2),
    ]));

    assert!(!result.is_valid);
    assert_eq!(error_codes(&result), vec![ErrorCode::DuplicateFileName]);
    assert_eq!(
        result.errors[0].target_file.as_deref(),
        Some("P0000001.JPG")
    );
}

/// Three occurrences produce two duplicate findings.
#[test]
fn test_triplicate_name_yields_two_findings() {
    let result = validate_with_defaults(&package(vec![
        entry("P0000001.JPG", 1),
        entry("P0000001.JPG", 2),
        entry("P0000001.JPG", 3),
    ]));

    assert_eq!(
        error_codes(&result),
        vec![ErrorCode::DuplicateFileName, ErrorCode::DuplicateFileName]
    );
}

// =============================================================================
// Metadata Rule Tests
// =============================================================================

#[test]
fn test_missing_photo_title() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.title = String::new();

    let result = validate_with_defaults(&package(vec![e]));
    assert_eq!(error_codes(&result), vec![ErrorCode::MissingPhotoTitle]);
    assert_eq!(result.errors[0].target_field.as_deref(), Some("title"));
}

#[test]
fn test_missing_shooting_date() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.shooting_date = String::new();

    let result = validate_with_defaults(&package(vec![e]));
    assert_eq!(error_codes(&result), vec![ErrorCode::MissingShootingDate]);
}

/// Scenario: a parseable but differently-encoded date fails.
#[test]
fn test_slash_date_encoding_rejected() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.shooting_date = "2024/01/15".to_string();

    let result = validate_with_defaults(&package(vec![e]));
    assert!(!result.is_valid);
    assert_eq!(error_codes(&result), vec![ErrorCode::InvalidDateFormat]);
    assert_eq!(
        result.errors[0].details.as_deref(),
        Some("found: 2024/01/15")
    );
}

#[test]
fn test_impossible_calendar_date_rejected() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.shooting_date = "2024-13-45".to_string();

    let result = validate_with_defaults(&package(vec![e]));
    assert_eq!(error_codes(&result), vec![ErrorCode::InvalidDateFormat]);
}

#[test]
fn test_missing_photo_category() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.category = String::new();

    let result = validate_with_defaults(&package(vec![e]));
    assert_eq!(error_codes(&result), vec![ErrorCode::MissingPhotoCategory]);
    assert_eq!(result.errors[0].target_field.as_deref(), Some("category"));
}

/// Defects on every entry are all reported; nothing short-circuits.
#[test]
fn test_defects_reported_exhaustively() {
    let mut first = entry("P0000001.JPG", 1);
    first.photo_info.title = String::new();
    let mut second = entry("P0000002.JPG", 2);
    second.photo_info.title = String::new();

    let result = validate_with_defaults(&package(vec![first, second]));
    assert_eq!(
        error_codes(&result),
        vec![ErrorCode::MissingPhotoTitle, ErrorCode::MissingPhotoTitle]
    );
}

// =============================================================================
// Warning Rule Tests
// =============================================================================

#[test]
fn test_no_representative_photo_warns() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.is_representative_photo = false;

    let result = validate_with_defaults(&package(vec![e]));
    assert!(result.is_valid, "warnings must not affect validity");
    assert_eq!(
        warning_codes(&result),
        vec![WarningCode::NoRepresentativePhoto]
    );
}

#[test]
fn test_missing_shooting_location_warns() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.shooting_location = None;

    let result = validate_with_defaults(&package(vec![e]));
    assert!(result.is_valid);
    assert_eq!(
        warning_codes(&result),
        vec![WarningCode::MissingShootingLocation]
    );
}

#[test]
fn test_empty_shooting_location_warns() {
    let mut e = entry("P0000001.JPG", 1);
    e.photo_info.shooting_location = Some(String::new());

    let result = validate_with_defaults(&package(vec![e]));
    assert_eq!(
        warning_codes(&result),
        vec![WarningCode::MissingShootingLocation]
    );
}

/// Scenario: a 15 MiB file warns at the default threshold, stays valid,
/// and still warns at a tighter threshold.
#[test]
fn test_large_file_size_warns() {
    let mut e = entry("P0000001.JPG", 1);
    e.file_size_bytes = 15 * 1024 * 1024;

    let result = validate_with_defaults(&package(vec![e.clone()]));
    assert!(result.is_valid);
    assert_eq!(warning_codes(&result), vec![WarningCode::LargeFileSize]);

    let tight = ValidatorConfig::with_max_file_size_mb(5);
    let result = validate(&package(vec![e]), &tight);
    assert_eq!(warning_codes(&result), vec![WarningCode::LargeFileSize]);
}

#[test]
fn test_file_at_threshold_does_not_warn() {
    let mut e = entry("P0000001.JPG", 1);
    e.file_size_bytes = 10 * 1024 * 1024;

    let result = validate_with_defaults(&package(vec![e]));
    assert!(result.warnings.is_empty());
}

// =============================================================================
// Ordering and Determinism Tests
// =============================================================================

/// Findings follow rule-catalogue order: structural, naming, metadata,
/// sequence; warnings after all errors.
#[test]
fn test_findings_in_catalogue_order() {
    let mut bad = entry("wrong.jpg", 3);
    bad.photo_info.title = String::new();
    let mut pkg = package(vec![bad]);
    pkg.picture_folder_path = String::new();

    let result = validate_with_defaults(&pkg);
    assert_eq!(
        error_codes(&result),
        vec![
            ErrorCode::MissingPicFolder,
            ErrorCode::InvalidPhotoFileName,
            ErrorCode::MissingPhotoTitle,
            ErrorCode::NonSequentialNumber,
        ]
    );
}

/// Validating the same package twice yields identical findings.
#[test]
fn test_validation_is_idempotent() {
    let mut bad = entry("wrong.jpg", 2);
    bad.photo_info.shooting_date = "2024/01/15".to_string();
    bad.photo_info.shooting_location = None;
    let pkg = package(vec![bad]);

    let first = validate_with_defaults(&pkg);
    let second = validate_with_defaults(&pkg);

    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.is_valid, second.is_valid);
}

/// Repeated validation stays stable over many runs.
#[test]
fn test_validation_is_deterministic() {
    let pkg = package(vec![entry("P0000001.JPG", 1)]);
    let baseline = validate_with_defaults(&pkg);

    for _ in 0..100 {
        let result = validate_with_defaults(&pkg);
        assert_eq!(result.errors, baseline.errors);
        assert_eq!(result.warnings, baseline.warnings);
    }
}
