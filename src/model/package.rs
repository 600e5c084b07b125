//! Package-level model types.
//!
//! Expected folder structure of a delivery package:
//!
//! ```text
//! PHOTO/                photo root folder
//!   PHOTO.XML           package metadata document
//!   PIC/                photo binaries, renamed per the standard
//!     P0000001.JPG
//!     P0000002.JPG
//!     ...
//!   DRA/                referenced drawings (optional)
//! ```

use serde::{Deserialize, Serialize};

use super::photo_info::PhotoInfo;

/// The complete delivery package handed to the validator.
///
/// Path fields are opaque strings; the validator never resolves them on
/// disk, it only checks presence and naming conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPackage {
    /// Top-level folder label (for example "PHOTO").
    pub root_folder_name: String,

    /// Path to the package metadata document (the PHOTO.XML analogue).
    pub metadata_document_path: String,

    /// Path to the folder holding the photo binaries.
    pub picture_folder_path: String,

    /// Photo entries in package order. Order is meaningful: findings are
    /// reported in iteration order.
    pub photo_files: Vec<PhotoFileEntry>,

    /// Referenced drawing entries. May be empty.
    #[serde(default)]
    pub drawing_files: Vec<DrawingFileEntry>,
}

/// One photo binary inside the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoFileEntry {
    /// File name as uploaded by the site operator.
    pub original_file_name: String,

    /// Mandated delivery name, "P" + 7 digits + extension ("P0000001.JPG").
    pub delivery_file_name: String,

    /// Path of the binary inside the picture folder.
    pub file_path: String,

    /// Size of the binary in bytes.
    pub file_size_bytes: u64,

    /// Metadata record for this photo.
    pub photo_info: PhotoInfo,
}

/// One drawing packaged alongside the photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingFileEntry {
    /// Delivery file name of the drawing.
    pub file_name: String,

    /// Path of the drawing inside the package.
    pub file_path: String,

    /// Drawing title as recorded in the metadata document.
    pub title: String,
}
