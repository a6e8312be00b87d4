//! Port trait implementation for `CatalogClient`.
//!
//! This module implements the core-owned `ProductCatalogPort` trait for
//! `CatalogClient`, mapping internal HTTP errors to the core error taxonomy
//! at the boundary.

use async_trait::async_trait;
use shopfront_core::{CatalogError, CatalogPage, CatalogResult, ProductCatalogPort};

use crate::client::CatalogClient;
use crate::error::CatalogHttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `CatalogHttpError` to core `CatalogError`.
///
/// The core taxonomy is three-way: the request never made it (`Network`), the
/// service answered with a non-success status (`Server`), or the body wasn't
/// what a listing looks like (`Malformed`).
fn map_error(err: CatalogHttpError) -> CatalogError {
    match err {
        CatalogHttpError::RequestFailed { status, .. } => CatalogError::Server { status },
        CatalogHttpError::InvalidResponse { message } => CatalogError::Malformed { message },
        CatalogHttpError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        CatalogHttpError::InvalidUrl(e) => CatalogError::Network {
            message: e.to_string(),
        },
        CatalogHttpError::JsonParse(e) => CatalogError::Malformed {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ProductCatalogPort for CatalogClient<B> {
    async fn fetch_page(&self, limit: u32) -> CatalogResult<CatalogPage> {
        self.fetch_page_internal(limit).await.map_err(map_error)
    }
}
