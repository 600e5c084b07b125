//! Validator configuration.
//!
//! The standard fixes every rule threshold except the file-size warning, so
//! this stays a single-field struct. It is passed explicitly to `validate`;
//! there is no ambient configuration, so concurrent validations with
//! different thresholds cannot interfere.

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Knobs recognized by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Threshold for the large-file warning, in mebibytes. Default 10.
    pub max_file_size_mb: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10,
        }
    }
}

impl ValidatorConfig {
    /// Config with a non-default file-size threshold.
    pub fn with_max_file_size_mb(max_file_size_mb: u64) -> Self {
        Self { max_file_size_mb }
    }

    /// The file-size threshold in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * BYTES_PER_MB
    }
}
