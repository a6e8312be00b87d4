//! List presentation adapter.
//!
//! Maps a load-state snapshot to a render plan for the presentation surface.
//! These types are "UI safe" - Clone + Debug + Serialize + Deserialize with
//! no infrastructure dependencies. The surface owns pixels, image loading,
//! and touch handling; the core only says what to show.

use serde::{Deserialize, Serialize};

use crate::domain::ProductSummary;
use crate::loader::LoadState;
use crate::views::CatalogView;

// ============================================================================
// Render Plan
// ============================================================================

/// A display descriptor for one product row/card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Stable identifier, usable as a list key.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Pre-formatted price label (e.g. `$9.99`).
    pub price_label: String,
    /// Pre-formatted rating label (e.g. `⭐ 4.5`), when a rating is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_label: Option<String>,
    /// Image reference for the surface to load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ProductCard {
    /// Build the display descriptor for one product.
    #[must_use]
    pub fn from_product(product: &ProductSummary) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price_label: format!("${}", product.price),
            rating_label: product.rating.map(|rating| format!("⭐ {rating}")),
            thumbnail_url: product.thumbnail_url.clone(),
        }
    }
}

/// What the presentation surface should show for one catalog view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderPlan {
    /// Show an activity indicator with the view's loading copy.
    Spinner {
        /// Copy displayed next to the indicator.
        label: String,
    },
    /// Show the product list, one card per item, in order.
    List(Vec<ProductCard>),
    /// Show the view's fixed error copy (reason-independent).
    Error {
        /// Copy displayed to the user.
        message: String,
    },
}

// ============================================================================
// Presenter
// ============================================================================

/// Stateless mapping from load-state snapshots to render plans.
///
/// A pure function of the snapshot: same input always yields the same plan,
/// and presenting never touches loader state. Only the display copy is
/// per-view.
#[derive(Debug, Clone, Copy)]
pub struct ListPresenter {
    view: CatalogView,
}

impl ListPresenter {
    /// Create a presenter with the given view's display copy.
    #[must_use]
    pub const fn new(view: CatalogView) -> Self {
        Self { view }
    }

    /// Map a snapshot to a render plan.
    ///
    /// `Idle` presents as a spinner: the owning view starts a fetch on
    /// activation, so an idle loader is about to be loading.
    #[must_use]
    pub fn present(&self, state: &LoadState) -> RenderPlan {
        match state {
            LoadState::Idle | LoadState::Loading => RenderPlan::Spinner {
                label: self.view.loading_label().to_string(),
            },
            LoadState::Ready(items) => {
                RenderPlan::List(items.iter().map(ProductCard::from_product).collect())
            }
            LoadState::Failed(_) => RenderPlan::Error {
                message: self.view.error_message().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CatalogError;

    fn product(id: u64, title: &str, price: f64, rating: Option<f64>) -> ProductSummary {
        ProductSummary {
            id,
            title: title.to_string(),
            price,
            rating,
            thumbnail_url: Some(format!("https://cdn.example.com/{id}/thumb.jpg")),
            description: None,
        }
    }

    #[test]
    fn test_card_formatting() {
        let card = ProductCard::from_product(&product(2, "Eyeshadow Palette", 19.99, Some(4.5)));
        assert_eq!(card.price_label, "$19.99");
        assert_eq!(card.rating_label.as_deref(), Some("⭐ 4.5"));

        let unrated = ProductCard::from_product(&product(3, "Powder Canister", 14.0, None));
        assert_eq!(unrated.price_label, "$14");
        assert!(unrated.rating_label.is_none());
    }

    #[test]
    fn test_idle_and_loading_present_spinner() {
        let presenter = ListPresenter::new(CatalogView::Preview);
        let spinner = RenderPlan::Spinner {
            label: "Loading products...".to_string(),
        };
        assert_eq!(presenter.present(&LoadState::Idle), spinner);
        assert_eq!(presenter.present(&LoadState::Loading), spinner);
    }

    #[test]
    fn test_ready_maps_one_to_one_in_order() {
        let items = vec![
            product(3, "Red Nail Polish", 8.99, Some(4.9)),
            product(1, "Red Lipstick", 12.99, None),
            product(2, "Eyeshadow Palette", 19.99, Some(4.5)),
        ];
        let presenter = ListPresenter::new(CatalogView::Full);

        match presenter.present(&LoadState::Ready(items.clone())) {
            RenderPlan::List(cards) => {
                assert_eq!(cards.len(), items.len());
                let ids: Vec<u64> = cards.iter().map(|card| card.id).collect();
                assert_eq!(ids, vec![3, 1, 2]);
            }
            other => panic!("expected a list plan, got {other:?}"),
        }
    }

    #[test]
    fn test_error_copy_is_reason_independent() {
        let presenter = ListPresenter::new(CatalogView::Full);
        let network = presenter.present(&LoadState::Failed(CatalogError::Network {
            message: "timeout".to_string(),
        }));
        let server = presenter.present(&LoadState::Failed(CatalogError::Server { status: 503 }));
        let malformed = presenter.present(&LoadState::Failed(CatalogError::Malformed {
            message: "no product collection".to_string(),
        }));

        assert_eq!(network, server);
        assert_eq!(server, malformed);
        assert_eq!(
            network,
            RenderPlan::Error {
                message: "Failed to load products. Please check your internet connection."
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_present_is_idempotent() {
        let state = LoadState::Ready(vec![
            product(1, "Red Lipstick", 12.99, Some(4.2)),
            product(2, "Eyeshadow Palette", 19.99, Some(4.5)),
        ]);
        let presenter = ListPresenter::new(CatalogView::Preview);
        assert_eq!(presenter.present(&state), presenter.present(&state));
    }
}
