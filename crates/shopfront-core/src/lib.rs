#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod loader;
pub mod nav;
pub mod ports;
pub mod render;
pub mod views;

// Re-export commonly used types for convenience
pub use domain::ProductSummary;
pub use loader::{CatalogLoader, LoadState};
pub use nav::{EntryGate, Screen, TransitionRequest};
pub use ports::{CatalogError, CatalogPage, CatalogResult, ProductCatalogPort};
pub use render::{ListPresenter, ProductCard, RenderPlan};
pub use views::CatalogView;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
