//! Delivery package model
//!
//! Frozen shapes of an electronic delivery package: folder paths, photo file
//! entries, per-photo metadata, and referenced drawings. These are plain
//! value types assembled by the storage/metadata collaborator and handed to
//! the validation engine as a one-shot, read-only input.
//!
//! Constructors stay dumb on purpose: every conformance rule lives in the
//! rule catalogue, so a malformed model still validates to a full report
//! instead of failing to construct.

mod package;
mod photo_info;

pub use package::{DeliveryPackage, DrawingFileEntry, PhotoFileEntry};
pub use photo_info::{PhotoInfo, MAJOR_CATEGORIES, PHOTO_CATEGORIES};
