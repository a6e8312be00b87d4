//! Product catalog port.
//!
//! This trait defines the interface the core domain uses to fetch product
//! pages from the remote catalog. The implementation lives in
//! `shopfront-catalog`.
//!
//! # Design
//!
//! - Uses core-owned DTOs, not remote API types
//! - Returns `CatalogError` for all failures
//! - Async methods for network operations
//! - No implementation details leak through this interface

use crate::domain::ProductSummary;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors from catalog port operations.
///
/// These are domain-level errors that consumers can handle. Implementation
/// errors (HTTP status codes, decode failures) are mapped to these at the
/// adapter boundary. All three collapse into `LoadState::Failed` at the
/// loader; the rendering surface owns user notification.
///
/// `Clone` + `PartialEq` so a failure can live inside a broadcast load-state
/// snapshot and be asserted on directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request could not be sent or no response was received.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network failure
        message: String,
    },

    /// A response was received with a non-success status.
    #[error("Catalog service responded with status {status}")]
    Server {
        /// HTTP status code
        status: u16,
    },

    /// The response parsed but is missing the expected structure.
    #[error("Malformed catalog response: {message}")]
    Malformed {
        /// What was missing or invalid
        message: String,
    },
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// DTOs
// ============================================================================

/// One page of catalog results, in the order the remote service returned
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Products in original response order.
    pub items: Vec<ProductSummary>,
    /// Total catalog size advertised by the service, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl CatalogPage {
    /// Check if this page carries no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of products on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Port Trait
// ============================================================================

/// Port trait for remote product catalog operations.
#[async_trait]
pub trait ProductCatalogPort: Send + Sync {
    /// Fetch a single page of up to `limit` products.
    ///
    /// Order of the returned items must match the order in the remote
    /// response. Records the remote sends without a usable `id` are dropped
    /// by the adapter, so the page may hold fewer than `limit` items.
    async fn fetch_page(&self, limit: u32) -> CatalogResult<CatalogPage>;
}
