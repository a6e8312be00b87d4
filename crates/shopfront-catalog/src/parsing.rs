//! JSON parsing functions for catalog API responses.
//!
//! This module provides sync parsing functions that convert raw JSON
//! responses into typed domain objects.

use crate::error::{CatalogHttpError, CatalogHttpResult};
use serde_json::Value;
use shopfront_core::{CatalogPage, ProductSummary};

/// Display cutoff for product descriptions.
const MAX_DESCRIPTION_LEN: usize = 200;

/// Parse a single product JSON object into a `ProductSummary`.
///
/// Returns None if the record has no usable `id`; every other field passes
/// through with a display-safe default.
pub fn parse_product(json: &Value) -> Option<ProductSummary> {
    let id = json.get("id").and_then(Value::as_u64)?;

    let title = json
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let price = json
        .get("price")
        .and_then(Value::as_f64)
        .unwrap_or_default();

    let rating = json.get("rating").and_then(Value::as_f64);

    let thumbnail_url = json
        .get("thumbnail")
        .and_then(|v| v.as_str())
        .map(std::string::ToString::to_string);

    let description = json.get("description").and_then(|v| v.as_str()).map(|s| {
        // Truncate long descriptions
        if s.chars().count() > MAX_DESCRIPTION_LEN {
            let cut: String = s.chars().take(MAX_DESCRIPTION_LEN - 3).collect();
            format!("{cut}...")
        } else {
            s.to_string()
        }
    });

    Some(ProductSummary {
        id,
        title,
        price,
        rating,
        thumbnail_url,
        description,
    })
}

/// Parse a listing response into a `CatalogPage`.
///
/// The envelope must carry a `products` array; records without an `id` are
/// dropped, all others keep their response order.
pub fn parse_product_page(json: &Value) -> CatalogHttpResult<CatalogPage> {
    let records = json
        .get("products")
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogHttpError::InvalidResponse {
            message: "Expected 'products' array in listing response".to_string(),
        })?;

    let items = records.iter().filter_map(parse_product).collect();
    let total = json.get("total").and_then(Value::as_u64);

    Ok(CatalogPage { items, total })
}
