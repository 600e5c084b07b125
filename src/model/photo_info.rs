//! Per-photo metadata record and the standard's category vocabularies.

use serde::{Deserialize, Serialize};

/// Major classification values fixed by the photo management standard.
///
/// Collaborators populate `PhotoInfo::major_category` from this list; the
/// validator itself only enforces presence, never membership, so an
/// out-of-vocabulary value still produces a complete report upstream.
pub const MAJOR_CATEGORIES: &[&str] = &[
    "工事",
    "測量",
    "調査",
    "地質",
    "広報",
    "設計",
    "その他",
];

/// Photo classification values fixed by the photo management standard.
pub const PHOTO_CATEGORIES: &[&str] = &[
    "着手前及び完成写真",
    "施工状況写真",
    "安全管理写真",
    "使用材料写真",
    "品質管理写真",
    "出来形管理写真",
    "災害写真",
    "その他",
];

/// Metadata record for a single photo, one per `PhotoFileEntry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoInfo {
    /// Declared sequence position; valid packages number photos 1..=N with
    /// no gaps or repeats.
    pub photo_number: u32,

    /// Major classification, drawn from [`MAJOR_CATEGORIES`].
    pub major_category: String,

    /// Photo classification, drawn from [`PHOTO_CATEGORIES`].
    pub category: String,

    /// Photo title. Required by the standard.
    pub title: String,

    /// Shooting date, exactly `YYYY-MM-DD`. No other encoding is accepted.
    pub shooting_date: String,

    /// Shooting location. Recommended but not mandatory.
    #[serde(default)]
    pub shooting_location: Option<String>,

    /// Whether this photo is the canonical/cover image for its work item.
    pub is_representative_photo: bool,

    /// Whether this photo counts toward the mandated submission frequency.
    pub is_submission_frequency_photo: bool,

    /// Whether a drawing is associated with this photo.
    pub has_drawing: bool,
}

impl PhotoInfo {
    /// Whether `major_category` is one of the standard's values.
    pub fn has_known_major_category(&self) -> bool {
        MAJOR_CATEGORIES.contains(&self.major_category.as_str())
    }

    /// Whether `category` is one of the standard's values.
    pub fn has_known_category(&self) -> bool {
        PHOTO_CATEGORIES.contains(&self.category.as_str())
    }
}
