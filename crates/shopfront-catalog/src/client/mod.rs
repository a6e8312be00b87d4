//! Catalog client for fetching product listings.
//!
//! This module provides the main client interface for interacting with
//! the remote product catalog API.

mod page;

use crate::config::CatalogClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ClientConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the remote product catalog API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultCatalogClient` for production code. The generic parameter `B`
/// is an implementation detail - external code should not instantiate this
/// directly but use `DefaultCatalogClient::new()`.
pub struct CatalogClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ClientConfig,
}

impl DefaultCatalogClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: &CatalogClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&CatalogClientConfig::default())
    }

    fn to_internal_config(config: &CatalogClientConfig) -> ClientConfig {
        ClientConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://dummyjson.com/products").expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ClientConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
