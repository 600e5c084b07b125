//! Metadata completeness rules.
//!
//! Per entry, in package iteration order: title, shooting date, category.
//! The date must be the exact `YYYY-MM-DD` encoding and denote a real
//! calendar date; a parseable-but-differently-encoded date ("2024/01/15")
//! is rejected.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::engine::ValidatorConfig;
use crate::model::DeliveryPackage;

use super::codes::ErrorCode;
use super::finding::{ErrorFinding, Finding};

static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();

fn date_shape() -> &'static Regex {
    DATE_SHAPE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"))
}

/// Whether a shooting date is the exact `YYYY-MM-DD` form of a real date.
pub fn is_valid_shooting_date(date: &str) -> bool {
    date_shape().is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Check required metadata fields on every photo entry.
pub fn check(package: &DeliveryPackage, _config: &ValidatorConfig) -> Vec<ErrorFinding> {
    let mut findings = Vec::new();

    for entry in &package.photo_files {
        let info = &entry.photo_info;

        if info.title.is_empty() {
            findings.push(
                Finding::new(ErrorCode::MissingPhotoTitle, "Photo title is empty")
                    .with_target_file(&entry.delivery_file_name)
                    .with_target_field("title"),
            );
        }

        if info.shooting_date.is_empty() {
            findings.push(
                Finding::new(ErrorCode::MissingShootingDate, "Shooting date is empty")
                    .with_target_file(&entry.delivery_file_name)
                    .with_target_field("shooting_date"),
            );
        } else if !is_valid_shooting_date(&info.shooting_date) {
            findings.push(
                Finding::new(
                    ErrorCode::InvalidDateFormat,
                    "Shooting date must be a calendar date in YYYY-MM-DD form",
                )
                .with_target_file(&entry.delivery_file_name)
                .with_target_field("shooting_date")
                .with_details(format!("found: {}", info.shooting_date)),
            );
        }

        if info.category.is_empty() {
            findings.push(
                Finding::new(ErrorCode::MissingPhotoCategory, "Photo category is empty")
                    .with_target_file(&entry.delivery_file_name)
                    .with_target_field("category"),
            );
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_form_accepted() {
        assert!(is_valid_shooting_date("2024-01-15"));
        assert!(is_valid_shooting_date("1999-12-31"));
        assert!(is_valid_shooting_date("2024-02-29")); // leap day
    }

    #[test]
    fn test_other_encodings_rejected() {
        for date in [
            "2024/01/15",
            "2024-1-15",
            "20240115",
            "15-01-2024",
            "2024-01-15T00:00:00Z",
            " 2024-01-15",
        ] {
            assert!(!is_valid_shooting_date(date), "{date:?} should be rejected");
        }
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert!(!is_valid_shooting_date("2024-13-45"));
        assert!(!is_valid_shooting_date("2023-02-29")); // not a leap year
        assert!(!is_valid_shooting_date("2024-00-10"));
    }
}
