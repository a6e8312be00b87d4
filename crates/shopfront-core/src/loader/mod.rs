//! Catalog fetch lifecycle.
//!
//! One `CatalogLoader` owns one fetch-and-state lifecycle for one view.
//! Observers subscribe to a watch channel and always see the most recently
//! completed transition.
//!
//! # Concurrency Model
//!
//! - The loader writes only to a `watch::Sender<LoadState>`; renderers
//!   subscribe, they are never called directly
//! - At most one fetch is in flight per instance: a `start` while `Loading`
//!   coalesces into the existing attempt (checked atomically inside the
//!   sender's critical section)
//! - A `CancellationToken` is cancelled on drop; an in-flight resolution
//!   arriving after teardown is discarded without publishing

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::domain::ProductSummary;
use crate::ports::{CatalogError, ProductCatalogPort};
use crate::views::CatalogView;

// ============================================================================
// Load State
// ============================================================================

/// Fetch progress for one catalog view.
///
/// Exactly one variant is active at any time. Transitions are monotonic per
/// attempt (`Idle → Loading → Ready | Failed`); a later `start` re-enters
/// `Loading` from either terminal state. Each transition replaces the whole
/// value; prior items are never mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// No fetch has been attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Terminal success; items preserve remote response order.
    Ready(Vec<ProductSummary>),
    /// Terminal failure; no partial data retained.
    Failed(CatalogError),
}

impl LoadState {
    /// Check if a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if this state ends a fetch attempt.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    /// The loaded items, if any.
    #[must_use]
    pub fn items(&self) -> Option<&[ProductSummary]> {
        match self {
            Self::Ready(items) => Some(items),
            _ => None,
        }
    }
}

// ============================================================================
// Catalog Loader
// ============================================================================

/// Owns the lifecycle of one remote catalog fetch.
///
/// Created when its owning view becomes active and dropped when the view is
/// torn down; there is no cross-activation memory. The two catalog views each
/// hold their own instance with no shared state between them.
///
/// `start` must be called from within a Tokio runtime.
pub struct CatalogLoader {
    catalog: Arc<dyn ProductCatalogPort>,
    page_size: u32,
    view: &'static str,
    state_tx: watch::Sender<LoadState>,
    cancel: CancellationToken,
}

impl CatalogLoader {
    /// Create a loader with an explicit request size.
    #[must_use]
    pub fn new(catalog: Arc<dyn ProductCatalogPort>, page_size: u32) -> Self {
        let (state_tx, _) = watch::channel(LoadState::Idle);
        Self {
            catalog,
            page_size,
            view: "catalog",
            state_tx,
            cancel: CancellationToken::new(),
        }
    }

    /// Create a loader parameterized for one of the catalog views.
    #[must_use]
    pub fn for_view(catalog: Arc<dyn ProductCatalogPort>, view: CatalogView) -> Self {
        let mut loader = Self::new(catalog, view.page_size());
        loader.view = view.label();
        loader
    }

    /// The request size this loader was parameterized with.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Subscribe to state transitions.
    ///
    /// The receiver starts at the current state and sees every later
    /// transition in order.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> LoadState {
        self.state_tx.borrow().clone()
    }

    /// Begin a fetch attempt.
    ///
    /// If a fetch is already in flight the call is a no-op: the caller is
    /// coalesced into the existing attempt and will observe its outcome
    /// through the subscription. From `Idle`, `Ready`, or `Failed` the state
    /// moves to `Loading` (discarding any prior result) and a single request
    /// for up to `page_size` items is issued.
    pub fn start(&self) {
        let begun = self.state_tx.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = LoadState::Loading;
                true
            }
        });

        if !begun {
            tracing::debug!(view = self.view, "fetch already in flight, coalescing");
            return;
        }

        tracing::debug!(view = self.view, limit = self.page_size, "starting catalog fetch");

        let catalog = Arc::clone(&self.catalog);
        let state_tx = self.state_tx.clone();
        let cancel = self.cancel.clone();
        let limit = self.page_size;
        let view = self.view;

        tokio::spawn(async move {
            let outcome = tokio::select! {
                () = cancel.cancelled() => {
                    tracing::debug!(view, "view torn down, abandoning fetch");
                    return;
                }
                result = catalog.fetch_page(limit) => result,
            };

            // Resolution raced teardown; the owning view is gone.
            if cancel.is_cancelled() {
                tracing::debug!(view, "discarding resolution after teardown");
                return;
            }

            let next = match outcome {
                Ok(page) => {
                    tracing::debug!(view, count = page.items.len(), "catalog fetch succeeded");
                    LoadState::Ready(page.items)
                }
                Err(e) => {
                    tracing::warn!(view, error = %e, "catalog fetch failed");
                    LoadState::Failed(e)
                }
            };

            state_tx.send_replace(next);
        });
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
