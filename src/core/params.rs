use serde::{Deserialize, Serialize};

/// Column prefix that marks a column as pixel data.
pub const PIXEL_PREFIX: &str = "pixel";

/// Upper bound of 8-bit intensity; inversion is `MAX_INTENSITY - v`.
pub const MAX_INTENSITY: i64 = 255;

/// Inversion parameters for library callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvertParams {
    /// Columns whose name starts with this (case-sensitive) are inverted
    pub prefix: String,
    /// Value each selected cell is subtracted from
    pub max_value: i64,
}

impl Default for InvertParams {
    fn default() -> Self {
        Self {
            prefix: PIXEL_PREFIX.to_string(),
            max_value: MAX_INTENSITY,
        }
    }
}
