//! Finding codes for the delivery standard's rule catalogue.
//!
//! Two disjoint closed vocabularies: error codes block submission, warning
//! codes flag the package for review. The string forms are a stable public
//! contract; consumers branch on them and they must never be renamed or
//! moved between kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Codes for defects that make a package unsubmittable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Root folder label is empty
    MissingRootFolder,
    /// Metadata document path is empty, or the document itself is absent
    /// or not well-formed
    MissingPhotoXml,
    /// Picture folder path is empty
    MissingPicFolder,
    /// Package contains no photo entries
    EmptyPhotoList,
    /// Delivery file name does not match the mandated pattern
    InvalidPhotoFileName,
    /// Delivery file name occurs more than once in the package
    DuplicateFileName,
    /// Photo title is empty
    MissingPhotoTitle,
    /// Shooting date is empty
    MissingShootingDate,
    /// Shooting date is present but not an exact YYYY-MM-DD calendar date
    InvalidDateFormat,
    /// Photo category is empty
    MissingPhotoCategory,
    /// Photo numbers do not form a contiguous 1..=N run
    NonSequentialNumber,
}

impl ErrorCode {
    /// Stable string form used in every rendering.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRootFolder => "MISSING_ROOT_FOLDER",
            Self::MissingPhotoXml => "MISSING_PHOTO_XML",
            Self::MissingPicFolder => "MISSING_PIC_FOLDER",
            Self::EmptyPhotoList => "EMPTY_PHOTO_LIST",
            Self::InvalidPhotoFileName => "INVALID_PHOTO_FILE_NAME",
            Self::DuplicateFileName => "DUPLICATE_FILE_NAME",
            Self::MissingPhotoTitle => "MISSING_PHOTO_TITLE",
            Self::MissingShootingDate => "MISSING_SHOOTING_DATE",
            Self::InvalidDateFormat => "INVALID_DATE_FORMAT",
            Self::MissingPhotoCategory => "MISSING_PHOTO_CATEGORY",
            Self::NonSequentialNumber => "NON_SEQUENTIAL_NUMBER",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Codes for defects that flag a submittable package for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// No photo in the package is flagged as representative
    NoRepresentativePhoto,
    /// Shooting location is absent or empty
    MissingShootingLocation,
    /// Photo binary exceeds the configured size threshold
    LargeFileSize,
}

impl WarningCode {
    /// Stable string form used in every rendering.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoRepresentativePhoto => "NO_REPRESENTATIVE_PHOTO",
            Self::MissingShootingLocation => "MISSING_SHOOTING_LOCATION",
            Self::LargeFileSize => "LARGE_FILE_SIZE",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
