//! Slide header payload

use serde::Deserialize;
use serde::Serialize;

use super::PropertyDictionary;
use super::PropertyEntry;
use super::entry::flatten;

/// The header document served for one slide image resource.
///
/// Every field is optional: a slide with no readable header is served as
/// `{}`, which is a valid empty response rather than a fault.
///
/// Alongside the property dictionary, the endpoint reports the image
/// pyramid shape (`level_dimensions`, `level_downsamples`); these are
/// surfaced for display but play no part in classification or binding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideHeader {
    /// Flat metadata dictionary: TIFF tags, vendor tags, reader properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyDictionary>,
    /// Pixel dimensions of each pyramid level, level 0 first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_dimensions: Option<Vec<(u64, u64)>>,
    /// Downsample factor of each pyramid level relative to level 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_downsamples: Option<Vec<f64>>,
}

impl SlideHeader {
    /// Flattens the property dictionary into table entries.
    ///
    /// An absent or empty dictionary yields an empty vec, so an empty
    /// response presents as an empty table.
    pub fn entries(&self) -> Vec<PropertyEntry> {
        self.properties.as_ref().map(flatten).unwrap_or_default()
    }

    /// Number of pyramid levels reported by the header.
    pub fn level_count(&self) -> usize {
        self.level_dimensions.as_ref().map_or(0, Vec::len)
    }

    /// Pixel dimensions of the full-resolution level, if reported.
    pub fn base_dimensions(&self) -> Option<(u64, u64)> {
        self.level_dimensions.as_ref()?.first().copied()
    }
}
