//! Product types shared across the catalog port and the presentation layer.

use serde::{Deserialize, Serialize};

/// A normalized, display-ready catalog entry.
///
/// This is the unit the loader and renderer manipulate. Fields beyond `id`
/// are display-only and pass through from the remote record unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Stable identifier, unique within one fetch result.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Price, currency-agnostic.
    pub price: f64,
    /// Rating (if the remote record carries one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Reference to an external image resource. Never fetched by the core;
    /// handed to the rendering surface as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Short description (truncated at parse time).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductSummary {
    /// Check if this product has an image the surface can load.
    #[must_use]
    pub const fn has_thumbnail(&self) -> bool {
        self.thumbnail_url.is_some()
    }
}
