//! Photo number sequencing rule.
//!
//! Declared photo numbers, sorted ascending, must form exactly 1..=N. The
//! rule reports the first index where contiguity breaks; later breaks are
//! consequences of the same defect and would only repeat the fix.

use crate::engine::ValidatorConfig;
use crate::model::DeliveryPackage;

use super::codes::ErrorCode;
use super::finding::{ErrorFinding, Finding};

/// Verify the sorted photo numbers run 1..=N with no gaps or repeats.
pub fn check(package: &DeliveryPackage, _config: &ValidatorConfig) -> Vec<ErrorFinding> {
    let mut numbers: Vec<u32> = package
        .photo_files
        .iter()
        .map(|entry| entry.photo_info.photo_number)
        .collect();
    numbers.sort_unstable();

    for (index, &found) in numbers.iter().enumerate() {
        let expected = index as u32 + 1;
        if found != expected {
            return vec![Finding::new(
                ErrorCode::NonSequentialNumber,
                "Photo numbers must run 1..N with no gaps or repeats",
            )
            .with_target_field("photo_number")
            .with_details(format!("expected {}, found {}", expected, found))];
        }
    }

    Vec::new()
}
