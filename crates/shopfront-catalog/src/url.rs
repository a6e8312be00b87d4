//! URL construction helpers for the catalog API.
//!
//! This module provides pure functions for building catalog API URLs,
//! ensuring consistent URL construction across all API calls.

use crate::models::ClientConfig;
use url::Url;

/// Build the listing URL for a single page of up to `limit` products.
///
/// The limit is clamped to at least 1; the service treats 0 as "no limit",
/// which would defeat the fixed request size.
pub fn build_page_url(config: &ClientConfig, limit: u32) -> Url {
    let mut url = config.base_url.clone();
    url.set_query(Some(&format!("limit={}", limit.max(1))));
    url
}
