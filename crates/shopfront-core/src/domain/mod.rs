//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, rendering surfaces, etc.).

mod product;

// Re-export domain types at the domain level for convenience
pub use product::ProductSummary;
