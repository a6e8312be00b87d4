//! Page fetching for the catalog client.

use crate::error::CatalogHttpResult;
use crate::http::HttpBackend;
use crate::parsing::parse_product_page;
use crate::url::build_page_url;
use shopfront_core::CatalogPage;

use super::CatalogClient;

impl<B: HttpBackend> CatalogClient<B> {
    /// Fetch a single page of up to `limit` products.
    ///
    /// Issues exactly one request; the caller decides whether and when to
    /// retry by calling again.
    pub(crate) async fn fetch_page_internal(&self, limit: u32) -> CatalogHttpResult<CatalogPage> {
        let url = build_page_url(&self.config, limit);
        let json: serde_json::Value = self.backend.get_json(&url).await?;
        parse_product_page(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fake_product_json, test_config};
    use crate::error::CatalogHttpError;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_page_returns_items_in_order() {
        let records: Vec<serde_json::Value> = (1..=10)
            .map(|id| fake_product_json(id, &format!("Product {id}")))
            .collect();
        let backend = FakeBackend::new().with_response(
            "limit=10",
            json!({"products": records, "total": 194, "skip": 0, "limit": 10}),
        );

        let client = CatalogClient::with_backend(test_config(), backend);
        let page = client.fetch_page_internal(10).await.unwrap();

        assert_eq!(page.len(), 10);
        let ids: Vec<u64> = page.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
        assert_eq!(page.total, Some(194));
    }

    #[tokio::test]
    async fn test_fetch_page_skips_idless_records() {
        let backend = FakeBackend::new().with_default(json!({
            "products": [
                fake_product_json(1, "Red Lipstick"),
                {"title": "Orphan Record"},
                fake_product_json(2, "Eyeshadow Palette"),
            ],
            "total": 3,
        }));

        let client = CatalogClient::with_backend(test_config(), backend);
        let page = client.fetch_page_internal(10).await.unwrap();
        assert_eq!(page.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_page_reports_missing_collection() {
        let backend = FakeBackend::new().with_default(json!({"error": "maintenance"}));

        let client = CatalogClient::with_backend(test_config(), backend);
        let err = client.fetch_page_internal(30).await.unwrap_err();
        assert!(matches!(err, CatalogHttpError::InvalidResponse { .. }));
    }
}
