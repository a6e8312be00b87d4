//! Internal client types.
//!
//! These types are internal to `shopfront-catalog` and are not exposed to
//! consumers. External consumers use the port DTOs defined in
//! `shopfront-core`.

use std::time::Duration;
use url::Url;

/// Internal configuration for the catalog client.
///
/// Derived from the public `CatalogClientConfig`; holds the base URL in
/// parsed form so request construction cannot fail.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the product listing endpoint
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://dummyjson.com/products")
                .expect("default catalog URL is valid"),
            user_agent: concat!("shopfront-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_parses() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.host_str(), Some("dummyjson.com"));
        assert_eq!(config.base_url.path(), "/products");
    }
}
