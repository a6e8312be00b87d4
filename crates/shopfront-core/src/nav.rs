//! Navigation request types.
//!
//! The core never pushes or pops a navigation stack. Views emit opaque
//! `TransitionRequest` values naming a target screen; an external navigation
//! collaborator fulfills them.

use crate::views::CatalogView;

/// The screens the navigation collaborator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Entry screen gating access to the rest of the app.
    Splash,
    /// Home screen with the condensed product preview.
    Home,
    /// Full catalog screen.
    Products,
}

impl Screen {
    /// Header title for this screen, if it shows one.
    #[must_use]
    pub const fn title(self) -> Option<&'static str> {
        match self {
            Self::Splash => None,
            Self::Home => Some("Home"),
            Self::Products => Some("All Products"),
        }
    }

    /// The catalog view this screen hosts, if any.
    #[must_use]
    pub const fn catalog_view(self) -> Option<CatalogView> {
        match self {
            Self::Splash => None,
            Self::Home => Some(CatalogView::Preview),
            Self::Products => Some(CatalogView::Full),
        }
    }
}

/// An opaque request to move to a different screen.
///
/// Fulfilled by the external navigation collaborator; issuing one has no
/// effect on core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Where the collaborator should go.
    pub target: Screen,
}

/// The entry screen's only behavior: defer to navigation.
///
/// No data dependency and no failure mode; it exists so that screen changes
/// are requests, not direct calls into a navigation stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryGate;

impl EntryGate {
    /// Request the transition out of the entry screen.
    #[must_use]
    pub const fn activate(self) -> TransitionRequest {
        TransitionRequest {
            target: Screen::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_gate_always_targets_home() {
        let gate = EntryGate;
        assert_eq!(gate.activate(), gate.activate());
        assert_eq!(gate.activate().target, Screen::Home);
    }

    #[test]
    fn test_screen_catalog_views() {
        assert_eq!(Screen::Splash.catalog_view(), None);
        assert_eq!(Screen::Home.catalog_view(), Some(CatalogView::Preview));
        assert_eq!(Screen::Products.catalog_view(), Some(CatalogView::Full));
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Splash.title(), None);
        assert_eq!(Screen::Products.title(), Some("All Products"));
    }
}
