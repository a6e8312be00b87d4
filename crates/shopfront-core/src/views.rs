//! Per-view parameterization of the catalog surfaces.
//!
//! Two views show the catalog: a condensed preview strip on the home screen
//! and the full catalog grid. Each gets its own loader instance (independent
//! state, independent fetch) and its own display copy; only the page size
//! and the strings differ.

/// Which catalog surface a loader/presenter pair is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogView {
    /// Condensed horizontal strip on the home screen.
    Preview,
    /// Full catalog grid.
    Full,
}

impl CatalogView {
    /// Fixed request size for this view.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        match self {
            Self::Preview => 10,
            Self::Full => 30,
        }
    }

    /// Copy shown while a fetch is in flight.
    #[must_use]
    pub const fn loading_label(self) -> &'static str {
        match self {
            Self::Preview => "Loading products...",
            Self::Full => "Loading all products...",
        }
    }

    /// Copy shown when a fetch fails. Reason-independent; the loader keeps
    /// the classified reason for logging, not for user-facing copy.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Preview => "Failed to load products. Please try again.",
            Self::Full => "Failed to load products. Please check your internet connection.",
        }
    }

    /// Short label for log fields.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Full => "full",
        }
    }
}
