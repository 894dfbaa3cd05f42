//! Products module.
//!
//! Catalog record shapes and catalog-level invariants, implemented purely as
//! deterministic data logic (no IO, no HTTP, no rendering).

pub mod price;
pub mod product;

pub use price::Price;
pub use product::{Product, ProductId, validate_catalog};
